use ship_fleet::monitor::{FleetEvent, NoOperationMonitor, RecordingMonitor};
use ship_fleet::{
    ErrorKind, FleetManager, Passenger, PassengerShip, Position, Ship, TankerShip, Vessel,
};

const EPS: f64 = 1e-9;

fn reference_tanker() -> TankerShip {
    TankerShip::builder()
        .with_imo("IMO 9321483")
        .with_name("Nordic Star")
        .with_dimensions(183.0, 32.2)
        .with_diesel_tanks(1, vec![1000.0])
        .with_heavy_fuel_tanks(1, vec![2000.0])
        .with_max_weight(156907.0)
        .build()
        .unwrap()
}

#[test]
fn refuel_diesel_tank_adds_density_weight() {
    let mut tanker = reference_tanker();
    tanker.refuel_tank(1, 500.0).unwrap();
    assert!((tanker.current_weight() - 500.0 * 0.85 / 1000.0).abs() < EPS);
    assert!((tanker.current_weight() - 0.425).abs() < EPS);
}

#[test]
fn refuel_then_empty_restores_zero_weight() {
    let mut tanker = reference_tanker();
    tanker.refuel_tank(1, 500.0).unwrap();
    tanker.empty_tank_full(1).unwrap();

    assert_eq!(tanker.current_weight(), 0.0);
    assert_eq!(tanker.tank(1).unwrap().current_volume(), 0.0);
}

#[test]
fn tanker_without_tanks_fails_to_build() {
    let err = TankerShip::builder()
        .with_imo("IMO 9321483")
        .with_name("Nordic Star")
        .with_dimensions(183.0, 32.2)
        .with_diesel_tanks(0, vec![])
        .with_heavy_fuel_tanks(0, vec![])
        .with_max_weight(156907.0)
        .build()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("At least one tank is required"));
}

#[test]
fn empty_fleet_lookups() {
    let mut fleet = FleetManager::with_monitor(NoOperationMonitor);

    let err = fleet
        .refuel_tanker_ship("IMO 9321483", 1, 100.0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::State);
    assert!(fleet.get_ship_by_imo("IMO 9999999").is_none());
    assert!(!fleet.remove_ship("IMO 9321483"));
    assert!(fleet.is_empty());
}

#[test]
fn fleet_round_trip_through_registry() {
    let mut fleet = FleetManager::with_monitor(RecordingMonitor::new());
    fleet.add_ship(reference_tanker()).unwrap();
    fleet
        .add_ship(
            PassengerShip::builder()
                .with_imo("IMO 9074729")
                .with_name("Sea Breeze")
                .with_dimensions(250.0, 35.0)
                .build()
                .unwrap(),
        )
        .unwrap();

    fleet
        .update_position("IMO 9321483", Position::new(56.13, 11.47, 1_498_178_663))
        .unwrap();
    fleet.refuel_tanker_ship("IMO 9321483", 2, 1000.0).unwrap();

    let roster = vec![
        Passenger::new("John", "Doe", "AB123456").unwrap(),
        Passenger::new("Jane", "Roe", "CD654321").unwrap(),
    ];
    fleet
        .update_passenger_list("IMO 9074729", roster.clone())
        .unwrap();
    fleet
        .update_passenger_list("IMO 9074729", roster.clone())
        .unwrap();

    let tanker = fleet
        .get_ship_by_imo("IMO 9321483")
        .and_then(Ship::as_tanker)
        .unwrap();
    assert!((tanker.current_weight() - 0.96).abs() < EPS);
    assert_eq!(tanker.current_position().unwrap().timestamp(), 1_498_178_663);

    let liner = fleet
        .get_ship_by_imo("IMO 9074729")
        .and_then(Ship::as_passenger)
        .unwrap();
    assert_eq!(liner.passengers(), roster.as_slice());

    let events = fleet.monitor().events();
    assert_eq!(events.len(), 6);
    assert!(matches!(events[0], FleetEvent::ShipAdded(_)));
    assert!(matches!(events[2], FleetEvent::PositionUpdated(_, _)));
    assert!(matches!(events[3], FleetEvent::Refueled(_, _)));
    assert!(matches!(events[5], FleetEvent::ManifestUpdated(_, 2)));

    assert!(fleet.remove_ship("IMO 9321483"));
    assert_eq!(fleet.ships().count(), 1);
}
