use crate::error::{FleetError, Result};
use crate::passenger::PassengerShip;
use crate::tanker::TankerShip;
use chrono::{DateTime, Utc};
use std::borrow::Borrow;
use std::fmt;

const IMO_PREFIX: &str = "IMO ";
const IMO_DIGITS: usize = 7;

/// A validated IMO ship identification number, e.g. `IMO 9321483`.
///
/// The seventh digit is a check digit: the first six digits are weighted
/// 7, 6, 5, 4, 3, 2 and the last decimal digit of the weighted sum must
/// equal it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Imo(String);

impl Imo {
    pub fn parse(value: &str) -> Result<Self> {
        if Self::is_valid(value) {
            Ok(Imo(value.to_string()))
        } else {
            Err(FleetError::validation(format!(
                "Invalid IMO number {value:?}"
            )))
        }
    }

    pub fn is_valid(value: &str) -> bool {
        let digits = match value.strip_prefix(IMO_PREFIX) {
            Some(d) if d.len() == IMO_DIGITS && d.bytes().all(|b| b.is_ascii_digit()) => d,
            _ => return false,
        };

        let digits: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();
        let sum: u32 = digits[..6]
            .iter()
            .zip((2..=7).rev())
            .map(|(d, weight)| d * weight)
            .sum();

        sum % 10 == digits[6]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Imo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Imo {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Imo {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        Imo::parse(s)
    }
}

/// A single geolocation fix. Bounds are checked when the fix is recorded
/// on a ship, not at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    latitude: f64,
    longitude: f64,
    timestamp: i64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64, timestamp: i64) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Unix time in seconds.
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The timestamp as a UTC date, `None` if it is outside chrono's range.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(FleetError::OutOfRange(format!(
                "Latitude must be between -90 and 90, got {}",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(FleetError::OutOfRange(format!(
                "Longitude must be between -180 and 180, got {}",
                self.longitude
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)?;
        match self.recorded_at() {
            Some(at) => write!(f, " at {}", at.format("%d/%m/%Y %H:%M:%S")),
            None => write!(f, " at t={}", self.timestamp),
        }
    }
}

/// State shared by every ship variant: identity, hull size and track.
#[derive(Debug, Clone)]
pub struct ShipCore {
    imo: Imo,
    name: String,
    length: f64,
    width: f64,
    position_history: Vec<Position>,
}

impl ShipCore {
    pub fn new(imo: &str, name: &str, length: f64, width: f64) -> Result<Self> {
        let imo = Imo::parse(imo)?;

        if name.trim().is_empty() {
            return Err(FleetError::validation("Ship name cannot be empty"));
        }
        // written so that NaN is rejected as well
        if !(length > 0.0 && width > 0.0) {
            return Err(FleetError::validation(
                "Invalid ship width or length (both should be positive)",
            ));
        }

        Ok(Self {
            imo,
            name: name.to_string(),
            length,
            width,
            position_history: Vec::new(),
        })
    }

    pub fn imo(&self) -> &Imo {
        &self.imo
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn position_history(&self) -> &[Position] {
        &self.position_history
    }

    pub fn update_position(&mut self, position: Position) -> Result<()> {
        position.validate()?;
        self.position_history.push(position);
        Ok(())
    }

    pub fn current_position(&self) -> Result<Position> {
        self.position_history
            .last()
            .copied()
            .ok_or(FleetError::NoPositionHistory)
    }
}

/// Behaviour common to every ship variant.
///
/// Implementors only provide access to their [`ShipCore`]; identity and
/// position tracking come for free.
pub trait Vessel {
    fn core(&self) -> &ShipCore;

    fn core_mut(&mut self) -> &mut ShipCore;

    fn imo(&self) -> &Imo {
        self.core().imo()
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn length(&self) -> f64 {
        self.core().length()
    }

    fn width(&self) -> f64 {
        self.core().width()
    }

    fn position_history(&self) -> &[Position] {
        self.core().position_history()
    }

    fn update_position(&mut self, position: Position) -> Result<()> {
        self.core_mut().update_position(position)
    }

    fn current_position(&self) -> Result<Position> {
        self.core().current_position()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipKind {
    Tanker,
    Passenger,
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipKind::Tanker => f.pad("Tanker ship"),
            ShipKind::Passenger => f.pad("Passenger ship"),
        }
    }
}

/// Any ship the fleet can hold.
#[derive(Debug, Clone)]
pub enum Ship {
    Tanker(TankerShip),
    Passenger(PassengerShip),
}

impl Ship {
    pub fn kind(&self) -> ShipKind {
        match self {
            Ship::Tanker(_) => ShipKind::Tanker,
            Ship::Passenger(_) => ShipKind::Passenger,
        }
    }

    pub fn as_tanker(&self) -> Option<&TankerShip> {
        match self {
            Ship::Tanker(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_tanker_mut(&mut self) -> Option<&mut TankerShip> {
        match self {
            Ship::Tanker(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_passenger(&self) -> Option<&PassengerShip> {
        match self {
            Ship::Passenger(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_passenger_mut(&mut self) -> Option<&mut PassengerShip> {
        match self {
            Ship::Passenger(p) => Some(p),
            _ => None,
        }
    }
}

impl Vessel for Ship {
    fn core(&self) -> &ShipCore {
        match self {
            Ship::Tanker(t) => t.core(),
            Ship::Passenger(p) => p.core(),
        }
    }

    fn core_mut(&mut self) -> &mut ShipCore {
        match self {
            Ship::Tanker(t) => t.core_mut(),
            Ship::Passenger(p) => p.core_mut(),
        }
    }
}

impl From<TankerShip> for Ship {
    fn from(ship: TankerShip) -> Self {
        Ship::Tanker(ship)
    }
}

impl From<PassengerShip> for Ship {
    fn from(ship: PassengerShip) -> Self {
        Ship::Passenger(ship)
    }
}
