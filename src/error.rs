use crate::plane::PlaneId;
use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;

/// Which way a plane was trying to go when the request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Manoeuvre {
    Landing,
    TakeOff,
}

impl fmt::Display for Manoeuvre {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Manoeuvre::Landing => write!(f, "Could not land plane"),
            Manoeuvre::TakeOff => write!(f, "Plane could not take off"),
        }
    }
}

/// Rejections raised by [`crate::airport::Airport`]. Messages are part of the
/// public contract and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AirportError {
    #[error("{0}. Weather was stormy.")]
    StormyWeather(Manoeuvre),
    #[error("Could not land plane. Plane is already landed.")]
    AlreadyLanded,
    #[error("Could not land plane. Airport at maximum capacity.")]
    AtCapacity,
    #[error("Plane could not take off. Plane is not at airport.")]
    NotAtAirport,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("stormy threshold must be within 0..=1, got {0}")]
    InvalidThreshold(f64),
    #[error("initial plane {plane} rejected: {source}")]
    InitialPlane {
        plane: PlaneId,
        #[source]
        source: AirportError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_exact() {
        assert_eq!(
            AirportError::StormyWeather(Manoeuvre::Landing).to_string(),
            "Could not land plane. Weather was stormy."
        );
        assert_eq!(
            AirportError::StormyWeather(Manoeuvre::TakeOff).to_string(),
            "Plane could not take off. Weather was stormy."
        );
        assert_eq!(
            AirportError::AlreadyLanded.to_string(),
            "Could not land plane. Plane is already landed."
        );
        assert_eq!(
            AirportError::AtCapacity.to_string(),
            "Could not land plane. Airport at maximum capacity."
        );
        assert_eq!(
            AirportError::NotAtAirport.to_string(),
            "Plane could not take off. Plane is not at airport."
        );
    }
}
