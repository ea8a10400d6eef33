// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The mailbox core: both stores plus view state, behind one set of query and
//! command operations. All mutation goes through the commands below so the
//! lifecycle rules cannot be bypassed.

use log::{debug, info, warn};
use uuid::Uuid;

use crate::error::{MailroomError, MailroomResult};
use crate::lifecycle::{self, Transition};
use crate::models::{Category, CategoryFilter, Contact, Conversation, Mail, MailEdits, Section, NOW_LABEL};
use crate::seed::Seed;
use crate::selection::{SelectionController, SelectionSnapshot};
use crate::store::{ContactStore, MailStore};

/// Sender used for records created before any sender was picked.
pub const DEFAULT_SENDER: &str = "me";

#[derive(Debug, Clone, Default)]
pub struct Mailbox {
    mails: MailStore,
    contacts: ContactStore,
    selection: SelectionController,
}

impl Mailbox {
    pub fn new(seed: Seed) -> Self {
        info!(
            "Initializing mailbox with {} mails and {} contacts",
            seed.mails.len(),
            seed.contacts.len()
        );
        Self {
            mails: MailStore::new(seed.mails),
            contacts: ContactStore::new(seed.contacts, seed.conversations),
            selection: SelectionController::new(),
        }
    }

    pub fn mails(&self) -> &MailStore {
        &self.mails
    }

    pub fn contacts(&self) -> &ContactStore {
        &self.contacts
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    // === Queries ===

    pub fn filter_mails(&self, category: Category, section: Section) -> Vec<&Mail> {
        debug!("Filtering mails: {}/{}", category, section);
        self.mails.filter(category, section)
    }

    pub fn unread_count(&self, category: Category, section: Section) -> usize {
        self.mails.unread_count(category, section)
    }

    pub fn get_mail(&self, id: &str) -> MailroomResult<&Mail> {
        self.mails.get(id).ok_or_else(|| MailroomError::mail_not_found(id))
    }

    pub fn filter_contacts(&self, term: &str, category: CategoryFilter) -> Vec<&Contact> {
        debug!("Filtering contacts: term={:?} category={:?}", term, category);
        self.contacts.filter(term, category)
    }

    pub fn get_contact(&self, id: &str) -> MailroomResult<&Contact> {
        self.contacts
            .get(id)
            .ok_or_else(|| MailroomError::NotFound(format!("contact {}", id)))
    }

    pub fn get_conversations(&self, contact_id: &str) -> &[Conversation] {
        self.contacts.conversations(contact_id)
    }

    pub fn visible_mails(&self) -> Vec<&Mail> {
        self.selection.visible_mails(&self.mails)
    }

    pub fn visible_contacts(&self) -> Vec<&Contact> {
        self.selection.visible_contacts(&self.contacts)
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        self.selection.snapshot(&self.mails, &self.contacts)
    }

    // === View commands ===

    pub fn set_category(&mut self, category: Category) {
        self.selection.set_category(category);
    }

    pub fn set_section(&mut self, section: Section) {
        self.selection.set_section(section);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.selection.set_search_term(term);
    }

    pub fn set_filter_category(&mut self, filter: CategoryFilter) {
        self.selection.set_filter_category(filter);
    }

    pub fn select_mail(&mut self, id: &str) -> MailroomResult<&Mail> {
        self.selection.select_mail(&self.mails, id)?;
        self.get_mail(id)
    }

    pub fn select_contact(&mut self, id: &str) -> MailroomResult<&Contact> {
        self.selection.select_contact(&self.contacts, id)?;
        self.get_contact(id)
    }

    pub fn select_conversation(&mut self, contact_id: &str, conversation_id: &str) -> MailroomResult<&Conversation> {
        self.selection
            .select_conversation(&self.contacts, contact_id, conversation_id)?;
        self.contacts
            .conversation(contact_id, conversation_id)
            .ok_or_else(|| MailroomError::NotFound(format!("conversation {}", conversation_id)))
    }

    pub fn clear_mail_selection(&mut self) {
        self.selection.clear_mail_selection();
    }

    pub fn clear_selection(&mut self) {
        debug!("Clearing all selections");
        self.selection.clear();
    }

    // === Draft lifecycle commands ===

    /// Creates a new, untagged and unread draft and appends it to the store.
    pub fn compose_draft(&mut self, category: Category, edits: &MailEdits) -> Mail {
        let mut draft = Mail {
            id: Uuid::new_v4().to_string(),
            sender: DEFAULT_SENDER.to_string(),
            subject: String::new(),
            preview: String::new(),
            timestamp: NOW_LABEL.to_string(),
            is_read: false,
            category,
            kind: Section::Draft,
            review_tag: None,
            recipient: None,
        };
        edits.apply_to(&mut draft);
        info!("Composed draft {} in {}", draft.id, category);
        self.mails.save(draft.clone());
        draft
    }

    pub fn save_draft(&mut self, id: &str, edits: &MailEdits) -> MailroomResult<Mail> {
        self.transition(id, edits, Transition::SaveAsDraft)
    }

    pub fn tag_for_review(&mut self, id: &str, edits: &MailEdits, reviewer: &str) -> MailroomResult<Mail> {
        self.transition(id, edits, Transition::TagForReview(reviewer))
    }

    pub fn send(&mut self, id: &str, edits: &MailEdits) -> MailroomResult<Mail> {
        self.transition(id, edits, Transition::Send)
    }

    /// Deletes a draft and returns the detail view to its empty state.
    ///
    /// Returns `Ok(false)` when the id is unknown, so repeating a delete is
    /// harmless. Sent mails cannot be deleted.
    pub fn delete_draft(&mut self, id: &str) -> MailroomResult<bool> {
        if let Some(mail) = self.mails.get(id) {
            if let Err(e) = lifecycle::ensure_deletable(mail) {
                warn!("Rejected delete of mail {}: {}", id, e);
                return Err(e);
            }
        }

        let removed = self.mails.delete(id).is_some();
        self.selection.clear_mail_selection();
        if removed {
            info!("Deleted draft {}", id);
        } else {
            debug!("Delete of unknown mail {} ignored", id);
        }
        Ok(removed)
    }

    fn transition(&mut self, id: &str, edits: &MailEdits, transition: Transition<'_>) -> MailroomResult<Mail> {
        let current = self.get_mail(id)?;
        let next = match lifecycle::apply(current, edits, transition) {
            Ok(next) => next,
            Err(e) => {
                warn!("Rejected {:?} on mail {}: {}", transition, id, e);
                return Err(e);
            }
        };

        self.mails.save(next.clone());
        match transition {
            Transition::SaveAsDraft => info!("Saved draft {}", id),
            Transition::TagForReview(reviewer) => info!("Tagged draft {} for review by {}", id, reviewer.trim()),
            Transition::Send => info!("Sent mail {}", id),
        }
        Ok(next)
    }
}
