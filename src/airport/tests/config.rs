use crate::airport::tests::utils::{calm_airport, capacity};
use crate::airport::{Airport, AirportConfig, DEFAULT_CAPACITY};

#[test]
fn test_new_airport_is_empty() {
    assert!(Airport::default().planes().is_empty());
    assert!(calm_airport(1).planes().is_empty());
    assert!(calm_airport(10).planes().is_empty());
}

#[test]
fn test_default_capacity() {
    assert_eq!(3, DEFAULT_CAPACITY.get());
    assert_eq!(3, Airport::default().maximum_capacity());
    assert_eq!(3, Airport::new(AirportConfig::default()).maximum_capacity());
}

#[test]
fn test_capacity_can_be_overridden() {
    let airport = Airport::new(AirportConfig::default().with_max_capacity(capacity(2)));
    assert_eq!(2, airport.maximum_capacity());
    assert_eq!("0/2 planes on the ground", airport.to_string());
}
