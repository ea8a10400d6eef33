// Record stores backing the mailbox and contacts views.

pub mod contact_store;
pub mod mail_store;

pub use contact_store::{matches_category, matches_term, ContactStore};
pub use mail_store::MailStore;
