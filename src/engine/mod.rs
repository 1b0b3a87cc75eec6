mod error;
mod query;
mod record;
pub mod source;
mod transaction;

pub use error::QueryError;
pub use query::QueryEngine;
pub use record::InputRecord;
pub use transaction::{IssueStatus, Transaction};
