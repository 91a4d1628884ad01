use crate::error::{FleetError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Diesel,
    HeavyFuel,
}

impl FuelType {
    /// Density in kg per litre.
    pub fn density(self) -> f64 {
        match self {
            FuelType::Diesel => 0.85,
            FuelType::HeavyFuel => 0.96,
        }
    }

    /// Weight in tonnes of `volume` litres of this fuel.
    #[inline]
    pub fn weight_of(self, volume: f64) -> f64 {
        volume * self.density() / 1000.0
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuelType::Diesel => f.write_str("Diesel"),
            FuelType::HeavyFuel => f.write_str("Heavy Fuel"),
        }
    }
}

/// A single fuel tank. Volumes are in litres.
#[derive(Debug, Clone, PartialEq)]
pub struct Tank {
    capacity: f64,
    current_volume: f64,
    fuel_type: FuelType,
}

impl Tank {
    pub fn new(capacity: f64, fuel_type: FuelType) -> Result<Self> {
        if !(capacity > 0.0 && capacity.is_finite()) {
            return Err(FleetError::validation(format!(
                "Invalid {fuel_type} tank capacity {capacity}"
            )));
        }

        Ok(Self {
            capacity,
            current_volume: 0.0,
            fuel_type,
        })
    }

    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    #[inline]
    pub fn current_volume(&self) -> f64 {
        self.current_volume
    }

    #[inline]
    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    /// Litres that still fit in the tank.
    #[inline]
    pub fn free_volume(&self) -> f64 {
        self.capacity - self.current_volume
    }

    /// Weight in tonnes of the fuel currently held.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.fuel_type.weight_of(self.current_volume)
    }

    pub fn set_current_volume(&mut self, volume: f64) -> Result<()> {
        if !(volume >= 0.0) {
            return Err(FleetError::validation("Volume must not be negative"));
        }
        if volume > self.capacity {
            return Err(FleetError::validation(format!(
                "Volume {volume} exceeds tank capacity {}",
                self.capacity
            )));
        }

        self.current_volume = volume;
        Ok(())
    }
}
