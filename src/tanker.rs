use crate::error::{FleetError, Result};
use crate::ship::{ShipCore, Vessel};
use crate::tank::{FuelType, Tank};
use std::ops::RangeInclusive;

/// Direction of a [`FuelTransfer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Refuel,
    Empty,
}

/// Receipt returned by a successful refuel or empty operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelTransfer {
    pub kind: TransferKind,
    pub tank_id: usize,
    pub fuel_type: FuelType,
    /// Litres moved in or out.
    pub volume: f64,
    /// Litres left in the tank afterwards.
    pub tank_volume: f64,
    /// Tonnes added (positive) or removed (negative).
    pub weight_delta: f64,
}

/// A ship carrying fuel in diesel and heavy-fuel tanks.
///
/// Tank IDs are 1-based. Diesel tanks come first, heavy-fuel tanks follow.
/// The carried weight is kept in sync with the tank contents and never
/// exceeds `max_weight`.
#[derive(Debug, Clone)]
pub struct TankerShip {
    core: ShipCore,
    tanks: Vec<Tank>,
    num_diesel_tanks: usize,
    num_heavy_fuel_tanks: usize,
    max_weight: f64,
    current_weight: f64,
}

impl TankerShip {
    pub fn builder() -> TankerShipBuilder {
        TankerShipBuilder::new()
    }

    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    /// Looks up a tank by its 1-based ID.
    pub fn tank(&self, tank_id: usize) -> Option<&Tank> {
        tank_id.checked_sub(1).and_then(|i| self.tanks.get(i))
    }

    pub fn num_diesel_tanks(&self) -> usize {
        self.num_diesel_tanks
    }

    pub fn num_heavy_fuel_tanks(&self) -> usize {
        self.num_heavy_fuel_tanks
    }

    /// Tonnes.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Tonnes of fuel on board.
    pub fn current_weight(&self) -> f64 {
        self.current_weight
    }

    /// IDs of the diesel tanks. Empty when the ship has none.
    pub fn diesel_tank_ids(&self) -> RangeInclusive<usize> {
        1..=self.num_diesel_tanks
    }

    /// IDs of the heavy-fuel tanks. Empty when the ship has none.
    pub fn heavy_fuel_tank_ids(&self) -> RangeInclusive<usize> {
        self.num_diesel_tanks + 1..=self.num_diesel_tanks + self.num_heavy_fuel_tanks
    }

    /// Adds `volume` litres to a tank.
    ///
    /// Fails without touching anything if the tank would overflow or the
    /// ship would go over its maximum weight.
    pub fn refuel_tank(&mut self, tank_id: usize, volume: f64) -> Result<FuelTransfer> {
        let index = self.tank_index(tank_id)?;
        check_volume(volume)?;

        let tank = &self.tanks[index];
        let target = tank.current_volume() + volume;
        if target > tank.capacity() {
            return Err(FleetError::validation(format!(
                "Refueling tank {tank_id} with {volume} litres exceeds its capacity of {}",
                tank.capacity()
            )));
        }
        self.fill(index, target, volume)
    }

    /// Fills a tank up to its capacity.
    pub fn refuel_tank_full(&mut self, tank_id: usize) -> Result<FuelTransfer> {
        let index = self.tank_index(tank_id)?;
        let (capacity, free) = (self.tanks[index].capacity(), self.tanks[index].free_volume());
        self.fill(index, capacity, free)
    }

    /// Removes `volume` litres from a tank.
    pub fn empty_tank(&mut self, tank_id: usize, volume: f64) -> Result<FuelTransfer> {
        let index = self.tank_index(tank_id)?;
        check_volume(volume)?;

        let tank = &self.tanks[index];
        if volume > tank.current_volume() {
            return Err(FleetError::validation(
                "Provided volume is larger than the tank's current volume",
            ));
        }
        let target = tank.current_volume() - volume;
        self.drain(index, target, volume)
    }

    /// Empties a tank completely.
    pub fn empty_tank_full(&mut self, tank_id: usize) -> Result<FuelTransfer> {
        let index = self.tank_index(tank_id)?;
        let volume = self.tanks[index].current_volume();
        self.drain(index, 0.0, volume)
    }

    fn fill(&mut self, index: usize, target: f64, volume: f64) -> Result<FuelTransfer> {
        if self.weight_with(index, target) > self.max_weight {
            return Err(FleetError::validation(format!(
                "Exceeds ship's maximum total weight of {} t",
                self.max_weight
            )));
        }
        self.apply(index, target, volume, TransferKind::Refuel)
    }

    fn drain(&mut self, index: usize, target: f64, volume: f64) -> Result<FuelTransfer> {
        self.apply(index, target, volume, TransferKind::Empty)
    }

    fn apply(
        &mut self,
        index: usize,
        target: f64,
        volume: f64,
        kind: TransferKind,
    ) -> Result<FuelTransfer> {
        let before = self.current_weight;
        let weight = self.weight_with(index, target);
        self.tanks[index].set_current_volume(target)?;
        self.current_weight = weight;

        let tank = &self.tanks[index];
        Ok(FuelTransfer {
            kind,
            tank_id: index + 1,
            fuel_type: tank.fuel_type(),
            volume,
            tank_volume: tank.current_volume(),
            weight_delta: self.current_weight - before,
        })
    }

    /// Total weight if tank `index` held `target` litres. The cap check and
    /// the stored weight must both come from here so they round identically.
    fn weight_with(&self, index: usize, target: f64) -> f64 {
        self.tanks
            .iter()
            .enumerate()
            .map(|(i, tank)| {
                if i == index {
                    tank.fuel_type().weight_of(target)
                } else {
                    tank.weight()
                }
            })
            .sum()
    }

    fn tank_index(&self, tank_id: usize) -> Result<usize> {
        if tank_id == 0 || tank_id > self.tanks.len() {
            return Err(FleetError::validation(format!(
                "Invalid tank ID {tank_id}, expected 1..={}",
                self.tanks.len()
            )));
        }
        Ok(tank_id - 1)
    }
}

fn check_volume(volume: f64) -> Result<()> {
    if !(volume >= 0.0 && volume.is_finite()) {
        return Err(FleetError::validation(format!(
            "Volume must be a non-negative number, got {volume}"
        )));
    }
    Ok(())
}

impl Vessel for TankerShip {
    fn core(&self) -> &ShipCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShipCore {
        &mut self.core
    }
}

/// Collects the configuration of a [`TankerShip`]; nothing is validated
/// until [`TankerShipBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct TankerShipBuilder {
    imo: Option<String>,
    name: Option<String>,
    length: f64,
    width: f64,
    num_diesel_tanks: usize,
    diesel_capacities: Vec<f64>,
    num_heavy_fuel_tanks: usize,
    heavy_fuel_capacities: Vec<f64>,
    max_weight: f64,
}

impl TankerShipBuilder {
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

    pub fn with_diesel_tanks(mut self, count: usize, capacities: Vec<f64>) -> Self {
        self.num_diesel_tanks = count;
        self.diesel_capacities = capacities;
        self
    }

    pub fn with_heavy_fuel_tanks(mut self, count: usize, capacities: Vec<f64>) -> Self {
        self.num_heavy_fuel_tanks = count;
        self.heavy_fuel_capacities = capacities;
        self
    }

    /// Tonnes.
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn build(self) -> Result<TankerShip> {
        if self.num_diesel_tanks == 0 && self.num_heavy_fuel_tanks == 0 {
            return Err(FleetError::validation("At least one tank is required"));
        }
        if self.diesel_capacities.len() != self.num_diesel_tanks {
            return Err(FleetError::validation(format!(
                "Mismatch in diesel tank capacities: expected {}, got {}",
                self.num_diesel_tanks,
                self.diesel_capacities.len()
            )));
        }
        if self.heavy_fuel_capacities.len() != self.num_heavy_fuel_tanks {
            return Err(FleetError::validation(format!(
                "Mismatch in heavy fuel tank capacities: expected {}, got {}",
                self.num_heavy_fuel_tanks,
                self.heavy_fuel_capacities.len()
            )));
        }

        let tanks = self
            .diesel_capacities
            .iter()
            .map(|&cap| Tank::new(cap, FuelType::Diesel))
            .chain(
                self.heavy_fuel_capacities
                    .iter()
                    .map(|&cap| Tank::new(cap, FuelType::HeavyFuel)),
            )
            .collect::<Result<Vec<_>>>()?;

        if !(self.max_weight >= 0.0 && self.max_weight.is_finite()) {
            return Err(FleetError::validation(format!(
                "Invalid maximum weight {}",
                self.max_weight
            )));
        }

        let imo = self.imo.ok_or(FleetError::Missing("IMO"))?;
        let name = self.name.ok_or(FleetError::Missing("Name"))?;
        let core = ShipCore::new(&imo, &name, self.length, self.width)?;

        Ok(TankerShip {
            core,
            tanks,
            num_diesel_tanks: self.num_diesel_tanks,
            num_heavy_fuel_tanks: self.num_heavy_fuel_tanks,
            max_weight: self.max_weight,
            current_weight: 0.0,
        })
    }
}
