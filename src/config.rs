use crate::airport::{Airport, AirportConfig, DEFAULT_CAPACITY};
use crate::error::ConfigError;
use crate::plane::PlaneId;
use crate::weather::{DEFAULT_STORMY_THRESHOLD, FixedWeather, RandomWeather, Weather};
use clap::ValueEnum;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum WeatherMode {
    #[default]
    Random,
    Calm,
    Stormy,
}

/// Tower settings, as read from a JSON file. Every field may be omitted.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub max_capacity: NonZeroUsize,
    pub stormy_threshold: f64,
    pub seed: Option<u64>,
    pub planes: Vec<PlaneId>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_capacity: DEFAULT_CAPACITY,
            stormy_threshold: DEFAULT_STORMY_THRESHOLD,
            seed: None,
            planes: vec![],
        }
    }
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(data)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.stormy_threshold) {
            return Err(ConfigError::InvalidThreshold(self.stormy_threshold));
        }
        Ok(())
    }

    pub fn weather(&self, mode: WeatherMode) -> Arc<dyn Weather> {
        match mode {
            WeatherMode::Calm => Arc::new(FixedWeather::calm()),
            WeatherMode::Stormy => Arc::new(FixedWeather::stormy()),
            WeatherMode::Random => match self.seed {
                Some(seed) => Arc::new(RandomWeather::seeded(self.stormy_threshold, seed)),
                None => Arc::new(RandomWeather::with_threshold(self.stormy_threshold)),
            },
        }
    }

    pub fn build(&self, mode: WeatherMode) -> Result<Airport, ConfigError> {
        self.validate()?;
        let config = AirportConfig::default()
            .with_weather(self.weather(mode))
            .with_max_capacity(self.max_capacity);
        Airport::with_planes(config, self.planes.iter().cloned())
            .map_err(|(plane, source)| ConfigError::InitialPlane { plane, source })
    }
}
