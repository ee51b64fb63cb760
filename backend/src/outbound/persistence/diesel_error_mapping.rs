//! Shared translation of pool and Diesel failures into port errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Coarse classification of a Diesel failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    Connection,
    UniqueViolation,
    Query,
}

impl DieselFailure {
    pub(crate) fn classify(error: &DieselError) -> Self {
        match error {
            DieselError::DatabaseError(kind, info) => {
                debug!(?kind, message = info.message(), "diesel operation failed");
                match kind {
                    DatabaseErrorKind::ClosedConnection => Self::Connection,
                    DatabaseErrorKind::UniqueViolation => Self::UniqueViolation,
                    _ => Self::Query,
                }
            }
            other => {
                debug!(error = %other, "diesel operation failed");
                Self::Query
            }
        }
    }
}

/// Message carried by every pool failure variant.
pub(crate) fn pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message }
        | PoolError::Build { message }
        | PoolError::Migration { message } => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DieselError::NotFound, DieselFailure::Query)]
    #[case(DieselError::RollbackTransaction, DieselFailure::Query)]
    fn non_database_errors_are_query_failures(
        #[case] error: DieselError,
        #[case] expected: DieselFailure,
    ) {
        assert_eq!(DieselFailure::classify(&error), expected);
    }

    #[rstest]
    #[case(DatabaseErrorKind::ClosedConnection, DieselFailure::Connection)]
    #[case(DatabaseErrorKind::UniqueViolation, DieselFailure::UniqueViolation)]
    #[case(DatabaseErrorKind::ForeignKeyViolation, DieselFailure::Query)]
    fn database_errors_are_classified_by_kind(
        #[case] kind: DatabaseErrorKind,
        #[case] expected: DieselFailure,
    ) {
        let error = DieselError::DatabaseError(kind, Box::new(String::from("boom")));
        assert_eq!(DieselFailure::classify(&error), expected);
    }

    #[rstest]
    fn pool_message_is_unwrapped() {
        assert_eq!(pool_error_message(PoolError::checkout("timed out")), "timed out");
    }
}
