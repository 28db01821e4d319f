//! Library surface of the schemamap CLI: logging bootstrap and schema-file
//! loading, kept here so integration tests can exercise them directly.

pub mod logging;
pub mod schema;
