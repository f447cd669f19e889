use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

pub const DEFAULT_STORMY_THRESHOLD: f64 = 0.25;

pub trait Weather: Send + Sync {
    fn is_stormy(&self) -> bool;
}

type Source = Box<dyn FnMut() -> f64 + Send>;

/// Draws a uniform value in `[0, 1)` on every query and calls it stormy
/// when the draw falls strictly below the threshold.
pub struct RandomWeather {
    threshold: f64,
    source: Mutex<Source>,
}

impl RandomWeather {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_STORMY_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self::from_rng(threshold, StdRng::from_os_rng())
    }

    pub fn seeded(threshold: f64, seed: u64) -> Self {
        Self::from_rng(threshold, StdRng::seed_from_u64(seed))
    }

    pub fn with_source(threshold: f64, source: impl FnMut() -> f64 + Send + 'static) -> Self {
        RandomWeather {
            threshold: threshold.clamp(0.0, 1.0),
            source: Mutex::new(Box::new(source)),
        }
    }

    fn from_rng(threshold: f64, mut rng: StdRng) -> Self {
        Self::with_source(threshold, move || rng.random::<f64>())
    }
}

impl Default for RandomWeather {
    fn default() -> Self {
        Self::new()
    }
}

impl Weather for RandomWeather {
    fn is_stormy(&self) -> bool {
        let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);
        (*source)() < self.threshold
    }
}

/// Always answers the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedWeather {
    stormy: bool,
}

impl FixedWeather {
    pub fn calm() -> Self {
        FixedWeather { stormy: false }
    }

    pub fn stormy() -> Self {
        FixedWeather { stormy: true }
    }
}

impl Weather for FixedWeather {
    fn is_stormy(&self) -> bool {
        self.stormy
    }
}
