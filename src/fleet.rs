use crate::error::{FleetError, Result};
use crate::monitor::{FleetMonitor, LogMonitor};
use crate::passenger::{Passenger, PassengerShip};
use crate::ship::{Imo, Position, Ship, ShipKind, Vessel};
use crate::tanker::{FuelTransfer, TankerShip};
use std::collections::HashMap;

/// In-memory registry of ships keyed by IMO number.
///
/// Variant-specific operations look the ship up by IMO and fail with a
/// state error when no ship of the right kind is registered under it.
#[derive(Debug)]
pub struct FleetManager<M = LogMonitor>
where
    M: FleetMonitor,
{
    ships: HashMap<Imo, Ship>,
    monitor: M,
}

impl FleetManager<LogMonitor> {
    pub fn new() -> Self {
        Self::with_monitor(LogMonitor)
    }
}

impl Default for FleetManager<LogMonitor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> FleetManager<M>
where
    M: FleetMonitor,
{
    pub fn with_monitor(monitor: M) -> Self {
        Self {
            ships: HashMap::new(),
            monitor,
        }
    }

    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    pub fn monitor_mut(&mut self) -> &mut M {
        &mut self.monitor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Registers a ship. A second ship with an IMO already in the fleet is
    /// rejected and the registered one is kept.
    pub fn add_ship(&mut self, ship: impl Into<Ship>) -> Result<()> {
        let ship = ship.into();
        if self.ships.contains_key(ship.imo()) {
            return Err(FleetError::validation(format!(
                "A ship with {} is already in the fleet",
                ship.imo()
            )));
        }

        self.monitor.on_ship_added(&ship);
        self.ships.insert(ship.imo().clone(), ship);
        Ok(())
    }

    /// Returns `true` if a ship was removed.
    pub fn remove_ship(&mut self, imo: &str) -> bool {
        match self.ships.remove_entry(imo) {
            Some((imo, _)) => {
                self.monitor.on_ship_removed(&imo);
                true
            }
            None => false,
        }
    }

    pub fn get_ship_by_imo(&self, imo: &str) -> Option<&Ship> {
        self.ships.get(imo)
    }

    /// Read-only view over every registered ship, in no particular order.
    pub fn ships(&self) -> impl ExactSizeIterator<Item = &Ship> + '_ {
        self.ships.values()
    }

    pub fn update_position(&mut self, imo: &str, position: Position) -> Result<()> {
        let ship = self
            .ships
            .get_mut(imo)
            .ok_or_else(|| FleetError::NotFound(format!("Ship {imo}")))?;

        ship.update_position(position)?;
        self.monitor.on_position_updated(ship.imo(), &position);
        Ok(())
    }

    pub fn refuel_tanker_ship(
        &mut self,
        imo: &str,
        tank_id: usize,
        volume: f64,
    ) -> Result<FuelTransfer> {
        let ship = tanker_mut(&mut self.ships, imo)?;
        let transfer = ship.refuel_tank(tank_id, volume)?;
        self.monitor.on_refuel(ship.imo(), &transfer);
        Ok(transfer)
    }

    pub fn empty_tanker_tank(
        &mut self,
        imo: &str,
        tank_id: usize,
        volume: f64,
    ) -> Result<FuelTransfer> {
        let ship = tanker_mut(&mut self.ships, imo)?;
        let transfer = ship.empty_tank(tank_id, volume)?;
        self.monitor.on_empty(ship.imo(), &transfer);
        Ok(transfer)
    }

    pub fn update_passenger_list(&mut self, imo: &str, passengers: Vec<Passenger>) -> Result<()> {
        let ship = passenger_mut(&mut self.ships, imo)?;
        ship.update_passenger_list(passengers);
        self.monitor
            .on_manifest_updated(ship.imo(), ship.passengers().len());
        Ok(())
    }

    /// The manifest report of a passenger ship.
    pub fn list_passenger_ship_passengers(&self, imo: &str) -> Result<String> {
        self.ships
            .get(imo)
            .and_then(Ship::as_passenger)
            .map(|ship| ship.listing().to_string())
            .ok_or_else(|| not_found(ShipKind::Passenger))
    }
}

fn not_found(kind: ShipKind) -> FleetError {
    FleetError::NotFound(kind.to_string())
}

fn tanker_mut<'a>(ships: &'a mut HashMap<Imo, Ship>, imo: &str) -> Result<&'a mut TankerShip> {
    ships
        .get_mut(imo)
        .and_then(Ship::as_tanker_mut)
        .ok_or_else(|| not_found(ShipKind::Tanker))
}

fn passenger_mut<'a>(
    ships: &'a mut HashMap<Imo, Ship>,
    imo: &str,
) -> Result<&'a mut PassengerShip> {
    ships
        .get_mut(imo)
        .and_then(Ship::as_passenger_mut)
        .ok_or_else(|| not_found(ShipKind::Passenger))
}
