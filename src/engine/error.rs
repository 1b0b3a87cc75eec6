use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// A field the query cannot do without is absent on one transaction.
    #[error("Transaction mtn={mtn:?} is missing required field `{field}`")]
    MissingField {
        field: &'static str,
        mtn: Option<u64>,
    },

    /// Generic failure of a guarded query. The cause is only logged.
    #[error("Query `{operation}` is unsupported for the loaded transactions")]
    Unsupported { operation: &'static str },
}
