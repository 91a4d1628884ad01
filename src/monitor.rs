use crate::ship::{Imo, Position, Ship, Vessel};
use crate::tanker::FuelTransfer;
use log::info;

/// Observes changes made through a [`crate::fleet::FleetManager`].
///
/// Every hook defaults to doing nothing, so implementors only override
/// the events they care about.
pub trait FleetMonitor {
    fn name(&self) -> &str;

    fn on_ship_added(&mut self, _ship: &Ship) {}

    fn on_ship_removed(&mut self, _imo: &Imo) {}

    fn on_position_updated(&mut self, _imo: &Imo, _position: &Position) {}

    fn on_refuel(&mut self, _imo: &Imo, _transfer: &FuelTransfer) {}

    fn on_empty(&mut self, _imo: &Imo, _transfer: &FuelTransfer) {}

    fn on_manifest_updated(&mut self, _imo: &Imo, _passengers: usize) {}
}

/// Writes fleet events through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMonitor;

impl FleetMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_ship_added(&mut self, ship: &Ship) {
        info!("{} {} ({}) added to fleet", ship.kind(), ship.imo(), ship.name());
        if let Ship::Tanker(tanker) = ship {
            let diesel = tanker.diesel_tank_ids();
            let heavy = tanker.heavy_fuel_tank_ids();
            info!(
                "Diesel tanks have IDs in range: <{}, {}>",
                diesel.start(),
                diesel.end()
            );
            info!(
                "Heavy fuel tanks have IDs in range: <{}, {}>",
                heavy.start(),
                heavy.end()
            );
        }
    }

    fn on_ship_removed(&mut self, imo: &Imo) {
        info!("{imo} removed from fleet");
    }

    fn on_position_updated(&mut self, imo: &Imo, position: &Position) {
        log::debug!("{imo} reported position {position}");
    }

    fn on_refuel(&mut self, imo: &Imo, transfer: &FuelTransfer) {
        info!(
            "{imo}: Tank {} refueled with {} liters of {}",
            transfer.tank_id, transfer.volume, transfer.fuel_type
        );
    }

    fn on_empty(&mut self, imo: &Imo, transfer: &FuelTransfer) {
        info!(
            "{imo}: Tank {} emptied to {} litres",
            transfer.tank_id, transfer.tank_volume
        );
    }

    fn on_manifest_updated(&mut self, imo: &Imo, passengers: usize) {
        info!("{imo}: passenger list replaced ({passengers} passengers)");
    }
}

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOperationMonitor;

impl FleetMonitor for NoOperationMonitor {
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }
}

/// An event captured by [`RecordingMonitor`].
#[derive(Debug, Clone, PartialEq)]
pub enum FleetEvent {
    ShipAdded(Imo),
    ShipRemoved(Imo),
    PositionUpdated(Imo, Position),
    Refueled(Imo, FuelTransfer),
    Emptied(Imo, FuelTransfer),
    ManifestUpdated(Imo, usize),
}

/// Keeps every event in memory, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingMonitor {
    events: Vec<FleetEvent>,
}

impl RecordingMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[FleetEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl FleetMonitor for RecordingMonitor {
    fn name(&self) -> &str {
        "RecordingMonitor"
    }

    fn on_ship_added(&mut self, ship: &Ship) {
        self.events.push(FleetEvent::ShipAdded(ship.imo().clone()));
    }

    fn on_ship_removed(&mut self, imo: &Imo) {
        self.events.push(FleetEvent::ShipRemoved(imo.clone()));
    }

    fn on_position_updated(&mut self, imo: &Imo, position: &Position) {
        self.events
            .push(FleetEvent::PositionUpdated(imo.clone(), *position));
    }

    fn on_refuel(&mut self, imo: &Imo, transfer: &FuelTransfer) {
        self.events.push(FleetEvent::Refueled(imo.clone(), *transfer));
    }

    fn on_empty(&mut self, imo: &Imo, transfer: &FuelTransfer) {
        self.events.push(FleetEvent::Emptied(imo.clone(), *transfer));
    }

    fn on_manifest_updated(&mut self, imo: &Imo, passengers: usize) {
        self.events
            .push(FleetEvent::ManifestUpdated(imo.clone(), passengers));
    }
}
