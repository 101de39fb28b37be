use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PrecinctError;

/// Tag value shared rows carry so they land in every release dataverse.
pub const ALL_TAG: &str = "all";

/// A release dataverse: one topic-specific dataset published from the
/// combined returns. Rows are routed by the `dataverse` column; a row tagged
/// `all` belongs to every dataverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataverse {
    President,
    Senate,
    House,
    State,
    Local,
}

/// All release dataverses, in publication order.
pub const RELEASE_DATAVERSES: &[Dataverse] = &[
    Dataverse::President,
    Dataverse::Senate,
    Dataverse::House,
    Dataverse::State,
    Dataverse::Local,
];

impl Dataverse {
    /// The short name used as the row tag and in file naming.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataverse::President => "president",
            Dataverse::Senate => "senate",
            Dataverse::House => "house",
            Dataverse::State => "state",
            Dataverse::Local => "local",
        }
    }
}

impl fmt::Display for Dataverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dataverse {
    type Err = PrecinctError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "president" => Ok(Dataverse::President),
            "senate" => Ok(Dataverse::Senate),
            "house" => Ok(Dataverse::House),
            "state" => Ok(Dataverse::State),
            "local" => Ok(Dataverse::Local),
            _ => Err(PrecinctError::UnknownDataverse(s.to_string())),
        }
    }
}

/// True if `tag` is a legal `dataverse` column value: a release dataverse
/// short name or the shared `all` tag.
pub fn is_valid_tag(tag: &str) -> bool {
    tag == ALL_TAG || Dataverse::from_str(tag).is_ok()
}
