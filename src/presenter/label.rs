use regex::Regex;

use crate::{
    error::{Error, Result},
    extractor::RecordId,
};

/// Derives the human-readable marker label from a record id.
pub struct Labeler {
    year_group: Regex,
}

impl Labeler {
    pub fn new() -> Result<Self> {
        Ok(Self {
            year_group: Regex::new(r"\s*\(\d{4}(?:/[IVXL]+)?\)$")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Annotated titles lose the `{...}` detail and the year group before it;
    /// plain titles are already bare.
    pub fn label(&self, id: &RecordId) -> String {
        id.title.find('{').map_or_else(
            || id.title.clone(),
            |open| {
                let head = id.title[..open].trim_end();
                self.year_group.replace(head, "").trim().to_string()
            },
        )
    }
}
