use crate::airport::{Airport, AirportConfig};
use crate::plane::PlaneId;
use crate::weather::{FixedWeather, RandomWeather, Weather};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub fn id(s: &str) -> PlaneId {
    Arc::from(s)
}

pub fn capacity(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

pub fn calm_airport(max_capacity: usize) -> Airport {
    Airport::new(
        AirportConfig::default()
            .with_weather(Arc::new(FixedWeather::calm()))
            .with_max_capacity(capacity(max_capacity)),
    )
}

/// Weather a test can flip between calls, counting how often it is asked.
#[derive(Default)]
pub struct Forecast {
    stormy: AtomicBool,
    queries: AtomicUsize,
}

impl Forecast {
    pub fn set_stormy(&self, stormy: bool) {
        self.stormy.store(stormy, Ordering::SeqCst);
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Weather for Forecast {
    fn is_stormy(&self) -> bool {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.stormy.load(Ordering::SeqCst)
    }
}

pub fn forecast_airport(max_capacity: usize) -> (Airport, Arc<Forecast>) {
    let forecast = Arc::new(Forecast::default());
    let airport = Airport::new(
        AirportConfig::default()
            .with_weather(forecast.clone())
            .with_max_capacity(capacity(max_capacity)),
    );
    (airport, forecast)
}

pub fn scripted_airport(draws: Vec<f64>) -> Airport {
    let mut draws = draws.into_iter();
    Airport::new(AirportConfig::default().with_weather(Arc::new(
        RandomWeather::with_source(0.25, move || draws.next().unwrap_or(0.99)),
    )))
}
