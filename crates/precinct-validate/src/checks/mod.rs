//! The check battery. Each module exposes a `check` function taking a frame
//! plus whatever reference data the rule needs and returning findings.

pub mod candidate;
pub mod county;
pub mod dataverse;
pub mod district;
pub mod duplicates;
pub mod office;
pub mod party;
pub mod schema;
pub mod state;
pub mod suspect;
pub mod unique;
pub mod votes;
pub mod writein;
