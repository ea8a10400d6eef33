//! Request payloads for the REST API and their validation rules.
//!
//! Field limits are checked here, before the mailbox core is called. Rules
//! that belong to the draft lifecycle (reviewer required, sent mail is
//! immutable) are left to the core.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::models::{Category, CategoryFilter, MailEdits, Section};

/// Edited field values; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct EditsPayload {
    // RFC 5322 line limit
    #[validate(length(max = 998))]
    pub subject: Option<String>,
    #[validate(length(max = 100000))]
    pub body: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub sender: Option<String>,
    #[validate(length(max = 320))]
    pub recipient: Option<String>,
}

impl From<EditsPayload> for MailEdits {
    fn from(payload: EditsPayload) -> Self {
        MailEdits {
            subject: payload.subject,
            body: payload.body,
            sender: payload.sender,
            recipient: payload.recipient,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ComposeRequest {
    pub category: Category,
    #[serde(flatten)]
    #[validate(nested)]
    pub edits: EditsPayload,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ReviewRequest {
    /// Empty values are rejected by the lifecycle, not here
    #[serde(default)]
    pub reviewer: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub edits: EditsPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailboxQuery {
    pub category: Category,
    pub section: Section,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MailboxViewRequest {
    pub category: Option<Category>,
    pub section: Option<Section>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ContactsViewRequest {
    #[validate(length(max = 200))]
    pub search: Option<String>,
    pub category: Option<CategoryFilter>,
}

/// Runs `validate()` and converts failures into an API error.
pub fn validated<T: Validate>(payload: T) -> Result<T, ApiError> {
    payload.validate()?;
    Ok(payload)
}
