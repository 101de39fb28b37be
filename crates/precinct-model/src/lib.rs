pub mod dataverse;
pub mod error;
pub mod metadata;
pub mod report;
pub mod schema;

pub use dataverse::{ALL_TAG, Dataverse, RELEASE_DATAVERSES, is_valid_tag};
pub use error::{PrecinctError, Result};
pub use metadata::{DatasetMetadata, VariableMetadata, documented_variables, merge_metadata};
pub use report::{Finding, ValidationReport};
pub use schema::{Column, ColumnType, PRECINCT_COLUMNS, SORT_COLUMNS, column_names, column_type, is_canonical};
