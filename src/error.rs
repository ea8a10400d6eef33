// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for mailbox operations
pub type MailroomResult<T> = Result<T, MailroomError>;

/// Errors raised by the mailbox core. None of them are fatal; callers surface
/// them as a transient notice and carry on.
#[derive(Debug, Error)]
pub enum MailroomError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid transition for mail {id}: {reason}")]
    InvalidTransition { id: String, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to read seed file: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    SeedFormat(#[from] serde_json::Error),
}

impl MailroomError {
    pub(crate) fn sent_is_terminal(id: &str, action: &str) -> Self {
        MailroomError::InvalidTransition {
            id: id.to_string(),
            reason: format!("cannot {} a mail that has already been sent", action),
        }
    }

    pub(crate) fn mail_not_found(id: &str) -> Self {
        MailroomError::NotFound(format!("mail {}", id))
    }
}
