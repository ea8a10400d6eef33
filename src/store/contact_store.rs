// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;

use crate::models::{CategoryFilter, Contact, Conversation};

/// Read-only contact directory with per-contact conversation history.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    /// contact id -> conversations, oldest first
    conversations: HashMap<String, Vec<Conversation>>,
}

impl ContactStore {
    pub fn new(contacts: Vec<Contact>, conversations: HashMap<String, Vec<Conversation>>) -> Self {
        Self {
            contacts,
            conversations,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    /// Conversation history of a contact; empty when it has none.
    pub fn conversations(&self, contact_id: &str) -> &[Conversation] {
        self.conversations
            .get(contact_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn conversation(&self, contact_id: &str, conversation_id: &str) -> Option<&Conversation> {
        self.conversations(contact_id)
            .iter()
            .find(|conversation| conversation.id == conversation_id)
    }

    /// Contacts matching both the search term and the category filter, in
    /// directory order.
    pub fn filter(&self, term: &str, category: CategoryFilter) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| matches_term(contact, term) && matches_category(contact, category))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Case-insensitive substring match against name or email.
pub fn matches_term(contact: &Contact, term: &str) -> bool {
    let needle = term.to_lowercase();
    contact.name.to_lowercase().contains(&needle) || contact.email.to_lowercase().contains(&needle)
}

pub fn matches_category(contact: &Contact, filter: CategoryFilter) -> bool {
    filter.admits(contact.category)
}
