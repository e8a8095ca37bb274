use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request body for creating a field
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateFieldRequest {
    #[validate(required, length(min = 2, max = 20))]
    pub code: Option<String>,

    #[validate(required, length(min = 3, max = 100))]
    pub name: Option<String>,

    #[validate(required, range(min = 1))]
    pub price_per_hour: Option<u64>,

    #[validate(email)]
    pub contact_email: Option<String>,
}

/// A field as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldResponse {
    pub uuid: Uuid,
    pub code: String,
    pub name: String,
    pub price_per_hour: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl FieldResponse {
    /// Build a new field from a request that passed validation
    pub fn from_request(request: CreateFieldRequest) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            code: request.code.unwrap_or_default(),
            name: request.name.unwrap_or_default(),
            price_per_hour: request.price_per_hour.unwrap_or_default(),
            contact_email: request.contact_email,
        }
    }
}
