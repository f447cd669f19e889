use crate::error::{AirportError, Manoeuvre};
use crate::plane::PlaneId;
use crate::weather::{RandomWeather, Weather};
use std::fmt;
use std::fmt::Formatter;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::debug;


pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(3).unwrap();

pub struct AirportConfig {
    pub weather: Option<Arc<dyn Weather>>,
    pub max_capacity: NonZeroUsize,
}

impl AirportConfig {
    pub fn with_weather(mut self, weather: Arc<dyn Weather>) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: NonZeroUsize) -> Self {
        self.max_capacity = max_capacity;
        self
    }
}

impl Default for AirportConfig {
    fn default() -> Self {
        AirportConfig {
            weather: None,
            max_capacity: DEFAULT_CAPACITY,
        }
    }
}

pub struct Airport {
    planes: Vec<PlaneId>,
    maximum_capacity: usize,
    weather: Arc<dyn Weather>,
}

impl Airport {
    pub fn new(config: AirportConfig) -> Airport {
        Airport {
            planes: Vec::with_capacity(config.max_capacity.get()),
            maximum_capacity: config.max_capacity.get(),
            weather: config
                .weather
                .unwrap_or_else(|| Arc::new(RandomWeather::new())),
        }
    }

    /// Builds an airport with planes already on the ground. The weather is
    /// not consulted, but duplicates and overflow are still refused.
    pub fn with_planes(
        config: AirportConfig,
        planes: impl IntoIterator<Item = PlaneId>,
    ) -> Result<Airport, (PlaneId, AirportError)> {
        let mut airport = Airport::new(config);
        for plane in planes {
            if let Err(e) = airport.admit(plane.clone()) {
                return Err((plane, e));
            }
        }
        Ok(airport)
    }

    pub fn planes(&self) -> &[PlaneId] {
        &self.planes
    }

    pub fn maximum_capacity(&self) -> usize {
        self.maximum_capacity
    }

    pub fn weather(&self) -> &Arc<dyn Weather> {
        &self.weather
    }

    pub fn contains(&self, plane: &PlaneId) -> bool {
        self.planes.iter().any(|p| **p == **plane)
    }

    pub fn is_full(&self) -> bool {
        self.planes.len() >= self.maximum_capacity
    }

    pub fn land(&mut self, plane: PlaneId) -> Result<(), AirportError> {
        if self.weather.is_stormy() {
            return Err(AirportError::StormyWeather(Manoeuvre::Landing));
        }
        self.admit(plane)
    }

    pub fn take_off(&mut self, plane: &PlaneId) -> Result<(), AirportError> {
        if self.weather.is_stormy() {
            return Err(AirportError::StormyWeather(Manoeuvre::TakeOff));
        }
        let idx = self
            .planes
            .iter()
            .position(|p| **p == **plane)
            .ok_or(AirportError::NotAtAirport)?;
        self.planes.remove(idx);
        debug!(plane = %plane, on_ground = self.planes.len(), "took off");

        self.assert_invariants();
        Ok(())
    }

    fn admit(&mut self, plane: PlaneId) -> Result<(), AirportError> {
        if self.contains(&plane) {
            return Err(AirportError::AlreadyLanded);
        }
        if self.planes.len() == self.maximum_capacity {
            return Err(AirportError::AtCapacity);
        }
        debug!(plane = %plane, on_ground = self.planes.len() + 1, "landed");
        self.planes.push(plane);

        self.assert_invariants();
        Ok(())
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.planes.len() <= self.maximum_capacity,
            "Planes on ground <= capacity invariant violated"
        );
        debug_assert!(
            self.planes
                .iter()
                .enumerate()
                .all(|(i, p)| self.planes[i + 1..].iter().all(|q| **q != **p)),
            "Plane uniqueness invariant violated"
        );
    }
}

impl Default for Airport {
    fn default() -> Self {
        Airport::new(AirportConfig::default())
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} planes on the ground", self.planes.len(), self.maximum_capacity)
    }
}
