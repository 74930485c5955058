use clap::Subcommand;
use serde_json::json;

use ecotrack_core::storage::{Config, Database};
use ecotrack_core::{UserProfile, WeatherClient};

#[derive(Subcommand)]
pub enum WeatherAction {
    /// Fetch current conditions
    Show {
        /// City to look up; defaults to the profile's city, then the
        /// configured default
        #[arg(long)]
        city: Option<String>,
    },
}

pub fn run(action: WeatherAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        WeatherAction::Show { city } => {
            let cfg = Config::load_or_default();
            let city = match city.or_else(profile_city).or(cfg.weather.default_city) {
                Some(city) => city,
                None => {
                    eprintln!("no city given and none stored (use --city, `profile set`, or config weather.default_city)");
                    std::process::exit(1);
                }
            };

            let client = WeatherClient::new(cfg.weather.base_url);
            let runtime = tokio::runtime::Runtime::new()?;
            let snapshot = runtime.block_on(client.fetch(&city))?;

            let view = json!({
                "city": city,
                "temp": snapshot.temp,
                "condition": snapshot.condition,
                "wind": snapshot.wind,
                "humidity": snapshot.humidity,
                "feels_like": snapshot.feels_like,
                "air_quality": snapshot.air_quality,
                "air_quality_status": snapshot.air_quality_level().label(),
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}

fn profile_city() -> Option<String> {
    let db = Database::open().ok()?;
    let profile = UserProfile::load(&db).ok()??;
    profile.city().map(|c| c.to_string())
}
