use std::{fmt, path::PathBuf, str::FromStr};

use crate::{
    error::{Error, Result},
    ranking::Coordinate,
};

/// Artifact written by the HTML renderer, relative to the working directory.
pub const OUTPUT_PATH: &str = "locations.html";

/// A release year as it appears in the dataset: exactly four ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Year(String);

impl Year {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `(YYYY)` group a dataset line must contain to be selected.
    pub fn marker(&self) -> String {
        format!("({})", self.0)
    }
}

impl FromStr for Year {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidArgument {
                parameter: "year",
                reason: format!("expected four digits, got {s:?}"),
            })
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a run needs, built once from the command line and handed to
/// each stage by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub year: Year,
    pub reference: Coordinate,
    pub dataset_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    pub fn new(year: Year, latitude: f64, longitude: f64, dataset_path: PathBuf) -> Result<Self> {
        if !latitude.is_finite() {
            return Err(Error::InvalidArgument {
                parameter: "latitude",
                reason: format!("{latitude} is not a finite number"),
            });
        }
        if !longitude.is_finite() {
            return Err(Error::InvalidArgument {
                parameter: "longitude",
                reason: format!("{longitude} is not a finite number"),
            });
        }

        Ok(Self {
            year,
            reference: Coordinate::new(latitude, longitude),
            dataset_path,
            output_path: PathBuf::from(OUTPUT_PATH),
        })
    }

    #[must_use]
    pub fn with_output_path(mut self, output_path: PathBuf) -> Self {
        self.output_path = output_path;
        self
    }
}
