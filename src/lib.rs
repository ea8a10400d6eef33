//! Library core for Mailroom: the F2P/P2F outbox and contacts state model.

// --- Modules ---
pub mod api;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod mailbox;
pub mod models;
pub mod seed;
pub mod selection;
pub mod store;

pub mod prelude {
    // Config
    pub use crate::config::Settings;

    // Core
    pub use crate::error::{MailroomError, MailroomResult};
    pub use crate::lifecycle::DraftState;
    pub use crate::mailbox::Mailbox;
    pub use crate::models::{
        Category, CategoryFilter, Contact, Conversation, Direction, Mail, MailEdits, Reviewer, Section,
    };
    pub use crate::seed::Seed;
    pub use crate::selection::{SelectionController, SelectionSnapshot};
    pub use crate::store::{ContactStore, MailStore};

    // Common Libs
    pub use log::{debug, error, info, trace, warn};
}
