use crate::error::{FleetError, Result};
use crate::ship::{ShipCore, Vessel};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Passenger {
    first_name: String,
    last_name: String,
    passport_number: String,
}

impl Passenger {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        passport_number: impl Into<String>,
    ) -> Result<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let passport_number = passport_number.into();

        if first_name.trim().is_empty() {
            return Err(FleetError::validation("First name cannot be empty"));
        }
        if last_name.trim().is_empty() {
            return Err(FleetError::validation("Last name cannot be empty"));
        }
        if passport_number.trim().is_empty() {
            return Err(FleetError::validation("Passport number cannot be empty"));
        }

        Ok(Self {
            first_name,
            last_name,
            passport_number,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn passport_number(&self) -> &str {
        &self.passport_number
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, Passport: {}",
            self.first_name, self.last_name, self.passport_number
        )
    }
}

#[derive(Debug, Clone)]
pub struct PassengerShip {
    core: ShipCore,
    passengers: Vec<Passenger>,
}

impl PassengerShip {
    pub fn builder() -> PassengerShipBuilder {
        PassengerShipBuilder::new()
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Replaces the whole manifest.
    pub fn update_passenger_list(&mut self, passengers: Vec<Passenger>) {
        self.passengers = passengers;
    }

    /// The manifest report: a header line followed by one line per passenger.
    pub fn listing(&self) -> PassengerListing<'_> {
        PassengerListing { ship: self }
    }
}

impl Vessel for PassengerShip {
    fn core(&self) -> &ShipCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShipCore {
        &mut self.core
    }
}

/// Display adapter produced by [`PassengerShip::listing`].
pub struct PassengerListing<'a> {
    ship: &'a PassengerShip,
}

impl fmt::Display for PassengerListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passengers on {}:", self.ship.name())?;
        for p in &self.ship.passengers {
            write!(f, "\n{p}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PassengerShipBuilder {
    imo: Option<String>,
    name: Option<String>,
    length: f64,
    width: f64,
    passengers: Option<Vec<Passenger>>,
}

impl PassengerShipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_imo(mut self, imo: impl Into<String>) -> Self {
        self.imo = Some(imo.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_dimensions(mut self, length: f64, width: f64) -> Self {
        self.length = length;
        self.width = width;
        self
    }

    pub fn with_passengers(mut self, passengers: Vec<Passenger>) -> Self {
        self.passengers = Some(passengers);
        self
    }

    pub fn build(self) -> Result<PassengerShip> {
        let imo = self.imo.ok_or(FleetError::Missing("IMO"))?;
        let name = self.name.ok_or(FleetError::Missing("Name"))?;
        let core = ShipCore::new(&imo, &name, self.length, self.width)?;

        Ok(PassengerShip {
            core,
            passengers: self.passengers.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn passenger(first: &str, last: &str, passport: &str) -> Passenger {
        Passenger::new(first, last, passport).unwrap()
    }

    fn ship() -> PassengerShip {
        PassengerShip::builder()
            .with_imo("IMO 9321483")
            .with_name("Sea Breeze")
            .with_dimensions(250.0, 35.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_passenger_rejects_blank_fields() {
        for (f, l, p) in [("", "Doe", "X1"), ("John", " ", "X1"), ("John", "Doe", "")] {
            let err = Passenger::new(f, l, p).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn test_passenger_display() {
        let p = passenger("John", "Doe", "AB123456");
        assert_eq!(p.to_string(), "John Doe, Passport: AB123456");
        assert_eq!(p.first_name(), "John");
        assert_eq!(p.last_name(), "Doe");
        assert_eq!(p.passport_number(), "AB123456");
    }

    #[test]
    fn test_build_without_passengers_starts_empty() {
        assert!(ship().passengers().is_empty());
    }

    #[test]
    fn test_build_keeps_given_passengers() {
        let ship = PassengerShip::builder()
            .with_imo("IMO 9321483")
            .with_name("Sea Breeze")
            .with_dimensions(250.0, 35.0)
            .with_passengers(vec![passenger("Ann", "Lee", "P1")])
            .build()
            .unwrap();
        assert_eq!(ship.passengers().len(), 1);
    }

    #[test]
    fn test_build_validates_identity() {
        let err = PassengerShip::builder()
            .with_name("Nameless")
            .with_dimensions(1.0, 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Null);

        let err = PassengerShip::builder()
            .with_imo("IMO 9321484")
            .with_name("Bad")
            .with_dimensions(1.0, 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = PassengerShip::builder()
            .with_imo("IMO 9321483")
            .with_name("Flat")
            .with_dimensions(0.0, 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_update_passenger_list_replaces() {
        let mut ship = ship();
        let first = vec![passenger("A", "One", "1"), passenger("B", "Two", "2")];
        let second = vec![passenger("C", "Three", "3")];

        ship.update_passenger_list(first.clone());
        assert_eq!(ship.passengers(), first.as_slice());
        ship.update_passenger_list(first.clone());
        assert_eq!(ship.passengers(), first.as_slice());

        ship.update_passenger_list(second.clone());
        assert_eq!(ship.passengers(), second.as_slice());
    }

    #[test]
    fn test_listing_format() {
        let mut ship = ship();
        assert_eq!(ship.listing().to_string(), "Passengers on Sea Breeze:");

        ship.update_passenger_list(vec![
            passenger("John", "Doe", "AB1"),
            passenger("Jane", "Roe", "CD2"),
        ]);
        assert_eq!(
            ship.listing().to_string(),
            "Passengers on Sea Breeze:\nJohn Doe, Passport: AB1\nJane Roe, Passport: CD2"
        );
    }
}
