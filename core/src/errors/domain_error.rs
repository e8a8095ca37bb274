//! Catalog of well-known domain errors
//!
//! Every variant's text is safe to send to clients verbatim. Anything that is
//! not one of these values is treated as an internal failure.

use thiserror::Error;

/// Curated domain error whose message is exposed to the client as-is
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownDomainError {
    #[error("internal server error")]
    InternalServerError,

    #[error("database server failed to execute query")]
    SqlError,

    #[error("too many requests")]
    TooManyRequests,

    #[error("unauthorized")]
    Unauthorized,

    #[error("invalid token")]
    InvalidToken,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("field not found")]
    FieldNotFound,

    #[error("field already exists")]
    FieldAlreadyExists,

    #[error("field schedule not found")]
    FieldScheduleNotFound,

    #[error("field schedule already exists")]
    FieldScheduleAlreadyExists,

    #[error("time not found")]
    TimeNotFound,

    #[error("time already exists")]
    TimeAlreadyExists,

    #[error("time already booked")]
    TimeAlreadyBooked,
}

impl KnownDomainError {
    /// Every registered sentinel
    pub const ALL: [KnownDomainError; 14] = [
        KnownDomainError::InternalServerError,
        KnownDomainError::SqlError,
        KnownDomainError::TooManyRequests,
        KnownDomainError::Unauthorized,
        KnownDomainError::InvalidToken,
        KnownDomainError::Forbidden,
        KnownDomainError::NotFound,
        KnownDomainError::FieldNotFound,
        KnownDomainError::FieldAlreadyExists,
        KnownDomainError::FieldScheduleNotFound,
        KnownDomainError::FieldScheduleAlreadyExists,
        KnownDomainError::TimeNotFound,
        KnownDomainError::TimeAlreadyExists,
        KnownDomainError::TimeAlreadyBooked,
    ];

    /// HTTP status the sentinel is reported with
    pub fn status_code(&self) -> u16 {
        match self {
            KnownDomainError::InternalServerError | KnownDomainError::SqlError => 500,
            KnownDomainError::TooManyRequests => 429,
            KnownDomainError::Unauthorized | KnownDomainError::InvalidToken => 401,
            KnownDomainError::Forbidden => 403,
            KnownDomainError::NotFound
            | KnownDomainError::FieldNotFound
            | KnownDomainError::FieldScheduleNotFound
            | KnownDomainError::TimeNotFound => 404,
            KnownDomainError::FieldAlreadyExists
            | KnownDomainError::FieldScheduleAlreadyExists
            | KnownDomainError::TimeAlreadyExists
            | KnownDomainError::TimeAlreadyBooked => 409,
        }
    }

    /// Machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            KnownDomainError::InternalServerError => "INTERNAL_SERVER_ERROR",
            KnownDomainError::SqlError => "SQL_ERROR",
            KnownDomainError::TooManyRequests => "TOO_MANY_REQUESTS",
            KnownDomainError::Unauthorized => "UNAUTHORIZED",
            KnownDomainError::InvalidToken => "INVALID_TOKEN",
            KnownDomainError::Forbidden => "FORBIDDEN",
            KnownDomainError::NotFound => "NOT_FOUND",
            KnownDomainError::FieldNotFound => "FIELD_NOT_FOUND",
            KnownDomainError::FieldAlreadyExists => "FIELD_ALREADY_EXISTS",
            KnownDomainError::FieldScheduleNotFound => "FIELD_SCHEDULE_NOT_FOUND",
            KnownDomainError::FieldScheduleAlreadyExists => "FIELD_SCHEDULE_ALREADY_EXISTS",
            KnownDomainError::TimeNotFound => "TIME_NOT_FOUND",
            KnownDomainError::TimeAlreadyExists => "TIME_ALREADY_EXISTS",
            KnownDomainError::TimeAlreadyBooked => "TIME_ALREADY_BOOKED",
        }
    }
}
