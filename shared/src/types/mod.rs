//! Wire types shared by every endpoint

pub mod pagination;
pub mod response;

pub use pagination::{paginate, PaginationParams, PaginationResult};
pub use response::{
    EnvelopeMessage, FieldMessage, ResponseEnvelope, ResponseStatus, INTERNAL_ERROR_MESSAGE,
    SUCCESS_MESSAGE,
};
