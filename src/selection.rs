// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! View state for the mailbox and contacts panels.
//!
//! Selections are held as ids and resolved against the stores on every read,
//! so a record that was replaced by a transition is never shown stale. A mail
//! and a conversation are never focused at the same time.

use log::debug;
use serde::Serialize;

use crate::error::{MailroomError, MailroomResult};
use crate::models::{Category, CategoryFilter, Contact, Conversation, Mail, Section};
use crate::store::{ContactStore, MailStore};

#[derive(Debug, Clone)]
pub struct SelectionController {
    active_category: Category,
    active_section: Section,
    selected_mail: Option<String>,
    search_term: String,
    filter_category: CategoryFilter,
    selected_contact: Option<String>,
    selected_conversation: Option<String>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self {
            active_category: Category::F2p,
            active_section: Section::Sent,
            selected_mail: None,
            search_term: String::new(),
            filter_category: CategoryFilter::All,
            selected_contact: None,
            selected_conversation: None,
        }
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mailbox view ---

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn set_category(&mut self, category: Category) {
        debug!("Active category -> {}", category);
        self.active_category = category;
    }

    pub fn set_section(&mut self, section: Section) {
        debug!("Active section -> {}", section);
        self.active_section = section;
    }

    pub fn visible_mails<'a>(&self, mails: &'a MailStore) -> Vec<&'a Mail> {
        mails.filter(self.active_category, self.active_section)
    }

    pub fn select_mail(&mut self, mails: &MailStore, id: &str) -> MailroomResult<()> {
        if mails.get(id).is_none() {
            return Err(MailroomError::mail_not_found(id));
        }
        debug!("Selected mail {}", id);
        self.selected_mail = Some(id.to_string());
        self.selected_conversation = None;
        Ok(())
    }

    pub fn selected_mail_id(&self) -> Option<&str> {
        self.selected_mail.as_deref()
    }

    pub fn selected_mail<'a>(&self, mails: &'a MailStore) -> Option<&'a Mail> {
        self.selected_mail.as_deref().and_then(|id| mails.get(id))
    }

    pub fn clear_mail_selection(&mut self) {
        if let Some(id) = self.selected_mail.take() {
            debug!("Cleared mail selection ({})", id);
        }
    }

    // --- Contacts view ---

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filter_category(&self) -> CategoryFilter {
        self.filter_category
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_filter_category(&mut self, filter: CategoryFilter) {
        self.filter_category = filter;
    }

    pub fn visible_contacts<'a>(&self, contacts: &'a ContactStore) -> Vec<&'a Contact> {
        contacts.filter(&self.search_term, self.filter_category)
    }

    /// Focuses a contact. A pending mail selection lives in another panel and
    /// is left alone; an open conversation of a different contact is closed.
    pub fn select_contact(&mut self, contacts: &ContactStore, id: &str) -> MailroomResult<()> {
        if contacts.get(id).is_none() {
            return Err(MailroomError::NotFound(format!("contact {}", id)));
        }
        if self.selected_contact.as_deref() != Some(id) {
            self.selected_conversation = None;
        }
        debug!("Selected contact {}", id);
        self.selected_contact = Some(id.to_string());
        Ok(())
    }

    pub fn select_conversation(
        &mut self,
        contacts: &ContactStore,
        contact_id: &str,
        conversation_id: &str,
    ) -> MailroomResult<()> {
        if contacts.conversation(contact_id, conversation_id).is_none() {
            return Err(MailroomError::NotFound(format!(
                "conversation {} of contact {}",
                conversation_id, contact_id
            )));
        }
        debug!("Selected conversation {} of contact {}", conversation_id, contact_id);
        self.selected_contact = Some(contact_id.to_string());
        self.selected_conversation = Some(conversation_id.to_string());
        self.selected_mail = None;
        Ok(())
    }

    pub fn selected_contact_id(&self) -> Option<&str> {
        self.selected_contact.as_deref()
    }

    pub fn selected_contact<'a>(&self, contacts: &'a ContactStore) -> Option<&'a Contact> {
        self.selected_contact.as_deref().and_then(|id| contacts.get(id))
    }

    pub fn selected_conversation_id(&self) -> Option<&str> {
        self.selected_conversation.as_deref()
    }

    pub fn selected_conversation<'a>(&self, contacts: &'a ContactStore) -> Option<&'a Conversation> {
        let contact_id = self.selected_contact.as_deref()?;
        let conversation_id = self.selected_conversation.as_deref()?;
        contacts.conversation(contact_id, conversation_id)
    }

    /// Drops every selection in both panels. Active category, section and
    /// contact filters are kept.
    pub fn clear(&mut self) {
        self.selected_mail = None;
        self.selected_contact = None;
        self.selected_conversation = None;
    }

    pub fn snapshot(&self, mails: &MailStore, contacts: &ContactStore) -> SelectionSnapshot {
        SelectionSnapshot {
            active_category: self.active_category,
            active_section: self.active_section,
            unread_sent: mails.unread_count(self.active_category, Section::Sent),
            unread_drafts: mails.unread_count(self.active_category, Section::Draft),
            selected_mail: self.selected_mail(mails).cloned(),
            visible_mails: self.visible_mails(mails).into_iter().cloned().collect(),
            search_term: self.search_term.clone(),
            filter_category: self.filter_category,
            selected_contact: self.selected_contact(contacts).cloned(),
            selected_conversation: self.selected_conversation(contacts).cloned(),
            visible_contacts: self.visible_contacts(contacts).into_iter().cloned().collect(),
        }
    }
}

/// Everything a front end needs to render both panels in one read.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionSnapshot {
    pub active_category: Category,
    pub active_section: Section,
    pub unread_sent: usize,
    pub unread_drafts: usize,
    pub selected_mail: Option<Mail>,
    pub visible_mails: Vec<Mail>,
    pub search_term: String,
    pub filter_category: CategoryFilter,
    pub selected_contact: Option<Contact>,
    pub selected_conversation: Option<Conversation>,
    pub visible_contacts: Vec<Contact>,
}
