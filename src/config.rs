use config::ConfigError;
use serde::Deserialize;
use serde_aux::prelude::deserialize_number_from_string;
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub application: ApplicationSettings,
    pub allow_cors: bool,
    pub game: GameSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GameSettings {
    pub round_duration_seconds: u8,
    pub word_duration_seconds: u8,
    pub heartbeat_millis: u64,
    /// JSON catalog of categories. The built-in catalog is used when missing.
    #[serde(default)]
    pub categories_file: Option<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            round_duration_seconds: 60,
            word_duration_seconds: 15,
            heartbeat_millis: 1000,
            categories_file: None,
        }
    }
}

impl GameSettings {
    pub fn heartbeat(&self) -> Duration {
        Duration::from_millis(self.heartbeat_millis.max(1))
    }
}

impl Config {
    pub fn get() -> Result<Config, ConfigError> {
        let base_path = std::env::current_dir().map_err(|error| {
            ConfigError::Message(format!(
                "Failed to determine the current directory. Error: '{error}'."
            ))
        })?;
        let configuration_directory = base_path.join("config");

        let environment: Environment = std::env::var("ENVIRONMENT")
            .map_err(|_| ConfigError::NotFound("ENVIRONMENT variable is not set.".to_string()))?
            .try_into()
            .map_err(ConfigError::Message)?;

        let environment_filename = format!("{}.yaml", environment.as_str());

        let config = config::Config::builder()
            .add_source(config::File::from(
                configuration_directory.join("base.yaml"),
            ))
            .add_source(config::File::from(
                configuration_directory.join(environment_filename),
            ))
            .build()?;

        config.try_deserialize::<Config>()
    }
}

enum Environment {
    Dev,
    Prod,
}

const DEV: &str = "dev";
const PROD: &str = "prod";

impl Environment {
    fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => DEV,
            Environment::Prod => PROD,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        match string.to_lowercase().as_str() {
            DEV => Ok(Self::Dev),
            PROD => Ok(Self::Prod),
            other => Err(format!(
                "{other} is not a supported environment. Use either `{DEV}` or `{PROD}`.",
            )),
        }
    }
}
