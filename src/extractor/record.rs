use std::fmt;

/// Unique key of an extracted record. Titles repeat when a film was shot in
/// several places; `sequence` tells those records apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId {
    pub title: String,
    pub sequence: usize,
}

impl RecordId {
    pub const fn new(title: String, sequence: usize) -> Self {
        Self { title, sequence }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} >>> {}", self.title, self.sequence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub id: RecordId,
    pub location_text: String,
}

impl RawRecord {
    pub const fn new(id: RecordId, location_text: String) -> Self {
        Self { id, location_text }
    }

    pub fn film_title(&self) -> &str {
        &self.id.title
    }
}
