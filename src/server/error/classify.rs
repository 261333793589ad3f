use sea_orm::DbErr;

use crate::model::api::ErrorKind;

use super::Error;

/// Classification of an error for the client
pub trait ErrorClass {
    /// Broad category shown to the user
    fn kind(&self) -> ErrorKind;

    /// Whether the failure suggests the database schema is out of date
    fn maintenance_hint(&self) -> bool {
        false
    }
}

impl ErrorClass for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthError(err) => err.kind(),
            Self::ValidationError(err) => err.kind(),
            Self::StorageError(err) => err.kind(),
            Self::ConfigError(err) => err.kind(),

            Self::DbErr(db_err) => match db_err {
                // Pool exhausted or database unreachable
                DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => ErrorKind::Network,
                _ => ErrorKind::Unknown,
            },

            Self::SessionRedisError(_) | Self::ReqwestError(_) => ErrorKind::Network,

            Self::NotFound { .. } => ErrorKind::Validation,

            Self::ProfileUnresolved { .. }
            | Self::ParseError(_)
            | Self::InternalError(_)
            | Self::SessionError(_) => ErrorKind::Unknown,
        }
    }

    fn maintenance_hint(&self) -> bool {
        match self {
            // Missing tables, columns or constraints surface as query or exec failures
            Self::DbErr(DbErr::Query(_) | DbErr::Exec(_)) => true,
            // The profile could not be written, usually a missing table or policy
            Self::ProfileUnresolved { .. } => true,
            _ => false,
        }
    }
}
