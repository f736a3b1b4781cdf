use tracing::{info, warn};

use crate::{
    config::Config,
    error::Result,
    extractor::{extract, read_dataset},
    geocoding::Resolver,
    presenter::Presenter,
    ranking::{rank, RankedRecord},
};

/// What a run produced, plus the per-record drops it absorbed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineReport {
    pub ranked: Vec<RankedRecord>,
    pub lines_selected: usize,
    pub lines_skipped: usize,
    pub records_unresolved: usize,
}

/// Extract, resolve, rank, present; each stage runs to completion before the
/// next one starts.
pub struct Pipeline<'a> {
    config: &'a Config,
    resolver: Resolver<'a>,
    presenter: Presenter<'a>,
}

impl<'a> Pipeline<'a> {
    pub const fn new(config: &'a Config, resolver: Resolver<'a>, presenter: Presenter<'a>) -> Self {
        Self {
            config,
            resolver,
            presenter,
        }
    }

    pub fn run(&self) -> Result<PipelineReport> {
        let text = read_dataset(&self.config.dataset_path)?;
        let extraction = extract(&text, &self.config.year);
        drop(text);

        info!(
            year = %self.config.year,
            selected = extraction.lines_selected,
            records = extraction.records.len(),
            skipped = extraction.skipped.len(),
            "extracted records"
        );

        let mut resolved = Vec::with_capacity(extraction.records.len());
        let mut records_unresolved = 0;

        for record in extraction.records {
            match self.resolver.resolve(&record.location_text) {
                Some(coordinate) => resolved.push((record, coordinate)),
                None => {
                    warn!(id = %record.id, location = %record.location_text, "dropping unresolved record");
                    records_unresolved += 1;
                }
            }
        }

        info!(
            resolved = resolved.len(),
            unresolved = records_unresolved,
            "resolved locations"
        );

        let ranked = rank(self.config.reference, resolved);
        self.presenter.present(&ranked)?;

        Ok(PipelineReport {
            ranked,
            lines_selected: extraction.lines_selected,
            lines_skipped: extraction.skipped.len(),
            records_unresolved,
        })
    }
}
