// In crates/app-config/src/types.rs

use serde::Deserialize;
use strategy::CrossoverSettings;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Settings for the historical data provider.
    pub data: DataSettings,
    /// Default windows for the crossover strategy, overridable per run
    /// from the command line.
    pub strategy: CrossoverSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The log level for the application.
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DataSettings {
    /// The REST base URL of the price history provider.
    pub base_url: String,
}
