pub mod error;
pub mod fleet;
pub mod model;
pub mod monitor;
pub mod passenger;
pub mod ship;
pub mod tank;
pub mod tanker;

pub use error::{ErrorKind, FleetError};
pub use fleet::FleetManager;
pub use passenger::{Passenger, PassengerShip, PassengerShipBuilder};
pub use ship::{Imo, Position, Ship, ShipKind, Vessel};
pub use tank::{FuelType, Tank};
pub use tanker::{FuelTransfer, TankerShip, TankerShipBuilder};

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use log::{debug, warn};
use model::{Record, ShipType};
use monitor::FleetMonitor;
use std::fs::File;
use std::io::Read;

/// Tank layout given to tankers discovered in AIS reports.
#[derive(Debug, Clone, PartialEq)]
pub struct TankLayout {
    pub diesel_capacities: Vec<f64>,
    pub heavy_fuel_capacities: Vec<f64>,
    pub max_weight: f64,
}

impl Default for TankLayout {
    fn default() -> Self {
        Self {
            diesel_capacities: vec![1000.0],
            heavy_fuel_capacities: vec![2000.0],
            max_weight: 156907.0,
        }
    }
}

#[derive(Debug)]
pub struct Config {
    paths: Vec<String>,
    layout: TankLayout,
}

impl Config {
    pub fn new(paths: Vec<String>, layout: TankLayout) -> Self {
        Self { paths, layout }
    }
}

fn command() -> Command {
    Command::new("ship_fleet")
        .version("0.1")
        .about("track a fleet of tankers and passenger ships from AIS reports [csv]")
        .arg(
            Arg::new("paths")
                .short('f')
                .long("file-path")
                .action(ArgAction::Append)
                .required(true)
                .help("AIS report file to ingest"),
        )
        .arg(
            Arg::new("diesel")
                .long("diesel-tanks")
                .default_value("1000")
                .help("comma separated diesel tank capacities in litres, may be empty"),
        )
        .arg(
            Arg::new("heavy")
                .long("heavy-fuel-tanks")
                .default_value("2000")
                .help("comma separated heavy fuel tank capacities in litres, may be empty"),
        )
        .arg(
            Arg::new("max_weight")
                .long("max-weight")
                .value_parser(value_parser!(f64))
                .default_value("156907.0")
                .help("maximum fuel weight per tanker in tonnes"),
        )
}

pub fn get_arg() -> Result<Config> {
    config_from(command().get_matches())
}

fn config_from(matches: clap::ArgMatches) -> Result<Config> {
    let paths = matches
        .get_many::<String>("paths")
        .unwrap_or_default()
        .cloned()
        .collect::<Vec<String>>();

    let layout = TankLayout {
        diesel_capacities: parse_capacities(
            matches.get_one::<String>("diesel").map_or("", |s| s.as_str()),
        )
        .context("invalid --diesel-tanks")?,
        heavy_fuel_capacities: parse_capacities(
            matches.get_one::<String>("heavy").map_or("", |s| s.as_str()),
        )
        .context("invalid --heavy-fuel-tanks")?,
        max_weight: matches
            .get_one::<f64>("max_weight")
            .copied()
            .unwrap_or_default(),
    };

    Ok(Config::new(paths, layout))
}

fn parse_capacities(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("{s:?} is not a capacity"))
        })
        .collect()
}

pub fn run(config: Config) -> Result<()> {
    let mut fleet = FleetManager::new();
    debug!(
        "config is {:?}, reporting through {}",
        config,
        fleet.monitor().name()
    );
    for path in &config.paths {
        let file = File::open(path).with_context(|| format!("failed to open file {path}"))?;
        let count = process_reader(file, &config.layout, &mut fleet)
            .with_context(|| format!("failed to process {path}"))?;
        println!("{} has {} records applied.", path, count);
    }

    let mut ships: Vec<&Ship> = fleet.ships().collect();
    ships.sort_by(|a, b| a.imo().cmp(b.imo()));
    for ship in ships {
        println!("{}", summary(ship));
    }

    Ok(())
}

/// Feeds every usable record of a CSV report into the fleet and returns how
/// many were applied. Unusable records are logged and skipped.
pub fn process_reader<R, M>(
    reader: R,
    layout: &TankLayout,
    fleet: &mut FleetManager<M>,
) -> Result<usize>
where
    R: Read,
    M: FleetMonitor,
{
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut count = 0;
    for (line, result) in rdr.deserialize().enumerate() {
        let record: Record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("record {} unreadable, skipped: {}", line + 1, e);
                continue;
            }
        };
        match apply_record(&record, layout, fleet) {
            Ok(()) => count += 1,
            Err(e) => warn!("record {} ({}) skipped: {}", line + 1, record.imo, e),
        }
    }

    Ok(count)
}

fn apply_record<M: FleetMonitor>(
    record: &Record,
    layout: &TankLayout,
    fleet: &mut FleetManager<M>,
) -> std::result::Result<(), FleetError> {
    if record.ship_type == ShipType::Other {
        return Err(FleetError::validation("unsupported ship type"));
    }
    let position = record.position()?;
    position.validate()?;

    match fleet.get_ship_by_imo(&record.imo) {
        Some(ship) if !matches_type(ship.kind(), record.ship_type) => {
            return Err(FleetError::validation(format!(
                "registered as {}, reported as {:?}",
                ship.kind(),
                record.ship_type
            )));
        }
        Some(_) => {}
        None => {
            debug!("registering {} {}", record.imo, record.name);
            fleet.add_ship(new_ship(record, layout)?)?;
        }
    }

    fleet.update_position(&record.imo, position)
}

fn matches_type(kind: ShipKind, ship_type: ShipType) -> bool {
    matches!(
        (kind, ship_type),
        (ShipKind::Tanker, ShipType::Tanker) | (ShipKind::Passenger, ShipType::Passenger)
    )
}

fn new_ship(record: &Record, layout: &TankLayout) -> std::result::Result<Ship, FleetError> {
    let ship: Ship = match record.ship_type {
        ShipType::Tanker => TankerShip::builder()
            .with_imo(&record.imo)
            .with_name(&record.name)
            .with_dimensions(record.length, record.width)
            .with_diesel_tanks(
                layout.diesel_capacities.len(),
                layout.diesel_capacities.clone(),
            )
            .with_heavy_fuel_tanks(
                layout.heavy_fuel_capacities.len(),
                layout.heavy_fuel_capacities.clone(),
            )
            .with_max_weight(layout.max_weight)
            .build()?
            .into(),
        ShipType::Passenger => PassengerShip::builder()
            .with_imo(&record.imo)
            .with_name(&record.name)
            .with_dimensions(record.length, record.width)
            .build()?
            .into(),
        ShipType::Other => {
            return Err(FleetError::validation(format!(
                "cannot register {} with an unsupported ship type",
                record.imo
            )))
        }
    };
    Ok(ship)
}

/// One line describing a ship and its last known position.
pub fn summary(ship: &Ship) -> String {
    let position = match ship.current_position() {
        Ok(p) => p.to_string(),
        Err(_) => "no position".to_string(),
    };
    format!(
        "{} | {:<20} | {:<14} | {:>4} fixes | {}",
        ship.imo(),
        ship.name(),
        ship.kind(),
        ship.position_history().len(),
        position
    )
}
