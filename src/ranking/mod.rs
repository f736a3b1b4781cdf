mod distance;
mod ranked_record;

pub use self::{
    distance::{haversine, Coordinate, EARTH_RADIUS_KM},
    ranked_record::RankedRecord,
};

use crate::extractor::RawRecord;

/// Measures every resolved record against `reference` and orders the result
/// nearest first. `resolved` must be in extraction order; equal distances keep
/// that order.
pub fn rank(reference: Coordinate, resolved: Vec<(RawRecord, Coordinate)>) -> Vec<RankedRecord> {
    let ranked = resolved
        .into_iter()
        .map(|(record, coordinate)| {
            let distance_km = haversine(reference, coordinate);
            RankedRecord::new(record, coordinate, distance_km)
        })
        .collect();

    order_by_distance(ranked)
}

/// Stable ascending sort on `distance_km`.
pub fn order_by_distance(mut ranked: Vec<RankedRecord>) -> Vec<RankedRecord> {
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}
