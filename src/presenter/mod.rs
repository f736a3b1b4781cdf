mod html_map;
mod label;

pub use self::{html_map::HtmlMapRenderer, label::Labeler};

use serde::Serialize;

use crate::{
    error::Result,
    ranking::{Coordinate, RankedRecord},
};

/// Number of ranked records shown in the near tier.
pub const NEAR_TIER_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Near,
    Remainder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub coordinate: Coordinate,
    pub label: String,
    pub tier: Tier,
    pub distance_km: f64,
}

/// Draws markers into the final artifact.
pub trait MapRenderer {
    fn render(&self, markers: &[MapMarker]) -> Result<()>;
}

/// Turns the ranked sequence into tiered, labelled markers, keeping its order.
pub fn markers(ranked: &[RankedRecord], labeler: &Labeler) -> Vec<MapMarker> {
    ranked
        .iter()
        .enumerate()
        .map(|(position, entry)| MapMarker {
            coordinate: entry.coordinate,
            label: labeler.label(&entry.record.id),
            tier: if position < NEAR_TIER_SIZE {
                Tier::Near
            } else {
                Tier::Remainder
            },
            distance_km: entry.distance_km,
        })
        .collect()
}

pub struct Presenter<'a> {
    renderer: &'a dyn MapRenderer,
    labeler: Labeler,
}

impl<'a> Presenter<'a> {
    pub fn new(renderer: &'a dyn MapRenderer) -> Result<Self> {
        Ok(Self {
            renderer,
            labeler: Labeler::new()?,
        })
    }

    pub fn present(&self, ranked: &[RankedRecord]) -> Result<()> {
        self.renderer.render(&markers(ranked, &self.labeler))
    }
}
