use std::{fs, path::PathBuf};

use askama::Template;
use serde::Serialize;
use tracing::info;

use crate::{error::Result, ranking::Coordinate};

use super::{MapMarker, MapRenderer};

#[derive(Template)]
#[template(path = "map.html")]
struct MapPage {
    reference_json: String,
    markers_json: String,
}

/// Writes a standalone Leaflet page with one layer per tier.
pub struct HtmlMapRenderer {
    output_path: PathBuf,
    reference: Coordinate,
}

impl HtmlMapRenderer {
    pub const fn new(output_path: PathBuf, reference: Coordinate) -> Self {
        Self {
            output_path,
            reference,
        }
    }
}

impl MapRenderer for HtmlMapRenderer {
    fn render(&self, markers: &[MapMarker]) -> Result<()> {
        let page = MapPage {
            reference_json: script_json(&self.reference)?,
            markers_json: script_json(&markers)?,
        };

        fs::write(&self.output_path, page.render()?)?;
        info!(path = %self.output_path.display(), markers = markers.len(), "wrote map");

        Ok(())
    }
}

/// JSON that is safe to inline in a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
