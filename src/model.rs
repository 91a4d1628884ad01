use crate::error::{FleetError, Result};
use crate::ship::Position;
use chrono::NaiveDateTime;

/// Timestamp format used by the AIS base stations, e.g. `23/06/2017 00:44:23`.
pub const AIS_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum ShipType {
    Tanker,
    Passenger,
    #[serde(other)]
    Other,
}

// header: timestamp,imo,name,ship_type,latitude,longitude,length,width
// example: 23/06/2017 00:44:23,IMO 9321483,NORDIC STAR,Tanker,56.134323,11.474578,129,24
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Record {
    pub timestamp: String,
    pub imo: String,
    pub name: String,
    pub ship_type: ShipType,
    pub latitude: f64,
    pub longitude: f64,
    pub length: f64,
    pub width: f64,
}

impl Record {
    /// Unix seconds of the report, read as UTC.
    pub fn unix_time(&self) -> Result<i64> {
        NaiveDateTime::parse_from_str(self.timestamp.trim(), AIS_TIME_FORMAT)
            .map(|t| t.and_utc().timestamp())
            .map_err(|source| FleetError::Timestamp {
                value: self.timestamp.clone(),
                source,
            })
    }

    pub fn position(&self) -> Result<Position> {
        Ok(Position::new(self.latitude, self.longitude, self.unix_time()?))
    }
}
