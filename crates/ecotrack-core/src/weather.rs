//! Weather lookup client.
//!
//! Thin typed wrapper over the weather endpoint consumed by the
//! dashboard: GET `<base>/weather?city=<name>` returning a JSON snapshot.
//! The endpoint is configurable; tests point it at a local mock.

use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Current conditions for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees Celsius.
    pub temp: f64,
    pub condition: String,
    /// Wind speed in km/h.
    pub wind: f64,
    /// Relative humidity percentage.
    pub humidity: u32,
    pub feels_like: f64,
    /// Air quality index.
    pub air_quality: u32,
}

impl WeatherSnapshot {
    pub fn air_quality_level(&self) -> AirQuality {
        AirQuality::from_index(self.air_quality)
    }
}

/// Air quality bands as rendered on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirQuality {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
}

impl AirQuality {
    pub fn from_index(aqi: u32) -> Self {
        match aqi {
            0..=2 => AirQuality::Good,
            3 => AirQuality::Moderate,
            4..=5 => AirQuality::UnhealthyForSensitiveGroups,
            _ => AirQuality::Unhealthy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AirQuality::Good => "Good",
            AirQuality::Moderate => "Moderate",
            AirQuality::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AirQuality::Unhealthy => "Unhealthy",
        }
    }
}

/// Weather endpoint client.
pub struct WeatherClient {
    base_url: String,
    http: reqwest::Client,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch current conditions for a city.
    pub async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let endpoint = format!("{}/weather", self.base_url.trim_end_matches('/'));
        let url = url::Url::parse_with_params(&endpoint, &[("city", city)])?;

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::UnexpectedStatus(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "temp": 22.0,
        "condition": "Sunny",
        "wind": 12.0,
        "humidity": 65,
        "feels_like": 23.0,
        "air_quality": 2
    }"#;

    #[tokio::test]
    async fn fetch_parses_a_snapshot() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/weather")
            .match_query(mockito::Matcher::UrlEncoded("city".into(), "Portland".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create_async()
            .await;

        let client = WeatherClient::new(server.url());
        let snapshot = client.fetch("Portland").await.unwrap();

        mock.assert_async().await;
        assert_eq!(snapshot.temp, 22.0);
        assert_eq!(snapshot.condition, "Sunny");
        assert_eq!(snapshot.humidity, 65);
        assert_eq!(snapshot.air_quality_level(), AirQuality::Good);
    }

    #[tokio::test]
    async fn city_names_are_query_encoded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/weather")
            .match_query(mockito::Matcher::UrlEncoded(
                "city".into(),
                "New York".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create_async()
            .await;

        let client = WeatherClient::new(server.url());
        client.fetch("New York").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/weather")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = WeatherClient::new(server.url());
        match client.fetch("Portland").await {
            Err(WeatherError::UnexpectedStatus(503)) => {}
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn air_quality_bands() {
        assert_eq!(AirQuality::from_index(0), AirQuality::Good);
        assert_eq!(AirQuality::from_index(2), AirQuality::Good);
        assert_eq!(AirQuality::from_index(3), AirQuality::Moderate);
        assert_eq!(
            AirQuality::from_index(5),
            AirQuality::UnhealthyForSensitiveGroups
        );
        assert_eq!(AirQuality::from_index(6), AirQuality::Unhealthy);
        assert_eq!(AirQuality::Unhealthy.label(), "Unhealthy");
    }
}
