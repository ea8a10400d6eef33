pub mod contact;
pub mod mail;

pub use contact::{CategoryFilter, Contact, Conversation, Direction};
pub use mail::{Category, Mail, MailEdits, Reviewer, Section, NOW_LABEL};
