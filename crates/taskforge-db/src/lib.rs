//! SQLite persistence sink for generated datasets.
//!
//! The sink bootstraps the schema from embedded DDL and writes a whole
//! dataset in one transaction over a single exclusive connection, with
//! foreign-key enforcement on so pipeline-ordering bugs fail loudly.

pub mod errors;
pub mod sink;

pub use errors::{SinkError, SinkResult};
pub use sink::{DatasetSink, SqliteSink};
