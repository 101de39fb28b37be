//! The validation engine: one battery run over a frame.
//!
//! The engine holds borrowed reference data and run settings; `run` executes
//! every applicable check in a fixed order and concatenates the findings
//! into a single report. Checks with no configured reference data are
//! skipped, so a quick mid-collection run needs only the frame itself.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::info;

use precinct_model::ValidationReport;
use precinct_reference::{CountyGazetteer, RaceCalendar, SeatCounts, StateGazetteer};

use crate::checks;

#[derive(Debug, Default)]
pub struct Validator<'a> {
    expected_columns: Option<Vec<String>>,
    states: Option<&'a StateGazetteer>,
    counties: Option<&'a CountyGazetteer>,
    seats: Option<&'a SeatCounts>,
    races: Option<&'a RaceCalendar>,
    /// State postal codes active in this run; scopes the gazetteers and the
    /// race calendar.
    scope: Vec<String>,
    year: i64,
    national: bool,
    list_values: bool,
}

impl<'a> Validator<'a> {
    pub fn new(year: i64) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    /// Expect exactly these columns; enables the schema check.
    pub fn with_expected_columns(mut self, columns: Vec<String>) -> Self {
        self.expected_columns = Some(columns);
        self
    }

    pub fn with_state_gazetteer(mut self, gazetteer: &'a StateGazetteer) -> Self {
        self.states = Some(gazetteer);
        self
    }

    pub fn with_county_gazetteer(mut self, gazetteer: &'a CountyGazetteer) -> Self {
        self.counties = Some(gazetteer);
        self
    }

    pub fn with_seat_counts(mut self, seats: &'a SeatCounts) -> Self {
        self.seats = Some(seats);
        self
    }

    pub fn with_race_calendar(mut self, races: &'a RaceCalendar) -> Self {
        self.races = Some(races);
        self
    }

    /// Restrict identifier checks to these states.
    pub fn with_scope(mut self, postals: Vec<String>) -> Self {
        self.scope = postals;
        self
    }

    /// Treat the frame as a national dataset: the office check then reports
    /// an entirely absent US President office.
    pub fn with_national(mut self, national: bool) -> Self {
        self.national = national;
        self
    }

    /// Also emit per-column distinct-value listings.
    pub fn with_value_listings(mut self, enable: bool) -> Self {
        self.list_values = enable;
        self
    }

    /// Run the battery against one frame. Advisory throughout; the only
    /// error path is missing seat-count configuration in the district check.
    pub fn run(&self, target: &str, df: &DataFrame) -> Result<ValidationReport> {
        let mut report = ValidationReport::new(target);

        if let Some(expected) = &self.expected_columns {
            report.extend(checks::schema::check(df, expected));
        }
        report.extend(checks::suspect::check(df));
        if let Some(states) = self.states {
            if self.scope.is_empty() {
                report.extend(checks::state::check(df, states));
            } else {
                report.extend(checks::state::check(df, &states.scoped(&self.scope)));
            }
        }
        if let Some(counties) = self.counties {
            if self.scope.is_empty() {
                report.extend(checks::county::check(df, counties));
            } else {
                report.extend(checks::county::check(df, &counties.scoped(&self.scope)));
            }
        }
        if let Some(seats) = self.seats {
            report.extend(checks::district::check(df, seats)?);
        }
        if let Some(races) = self.races {
            report.extend(checks::office::check(
                df,
                races,
                &self.scope,
                self.year,
                self.national,
            ));
        }
        report.extend(checks::candidate::check(df));
        report.extend(checks::writein::check(df));
        report.extend(checks::party::check(df));
        report.extend(checks::votes::check(df));
        report.extend(checks::dataverse::check(df));
        report.extend(checks::duplicates::check(df));
        if self.list_values {
            report.extend(checks::unique::check(df, checks::unique::REVIEW_COLUMNS));
        }

        info!(
            target = report.target,
            findings = report.len(),
            "validation run complete"
        );
        Ok(report)
    }
}
