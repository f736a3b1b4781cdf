use crate::extractor::RawRecord;

use super::distance::Coordinate;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecord {
    pub record: RawRecord,
    pub coordinate: Coordinate,
    pub distance_km: f64,
}

impl RankedRecord {
    pub const fn new(record: RawRecord, coordinate: Coordinate, distance_km: f64) -> Self {
        Self {
            record,
            coordinate,
            distance_km,
        }
    }
}
