// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use log::debug;

use crate::models::{Category, Mail, Section};

/// Authoritative in-memory set of mail records, kept in insertion order.
///
/// The store performs no validation of its own; lifecycle rules are enforced
/// before records reach `save`.
#[derive(Debug, Clone, Default)]
pub struct MailStore {
    mails: Vec<Mail>,
}

impl MailStore {
    pub fn new(mails: impl IntoIterator<Item = Mail>) -> Self {
        let mut store = Self::default();
        for mail in mails {
            store.save(mail);
        }
        store
    }

    /// All mails of the given category and kind, in store order
    pub fn filter(&self, category: Category, section: Section) -> Vec<&Mail> {
        self.mails
            .iter()
            .filter(|mail| mail.belongs_to(category, section))
            .collect()
    }

    pub fn unread_count(&self, category: Category, section: Section) -> usize {
        self.mails
            .iter()
            .filter(|mail| mail.belongs_to(category, section) && !mail.is_read)
            .count()
    }

    pub fn get(&self, id: &str) -> Option<&Mail> {
        self.mails.iter().find(|mail| mail.id == id)
    }

    /// Upserts by id. An existing record is replaced whole and keeps its
    /// position; a new one is appended.
    pub fn save(&mut self, mail: Mail) {
        match self.mails.iter_mut().find(|existing| existing.id == mail.id) {
            Some(existing) => {
                debug!("Replacing mail {}", mail.id);
                *existing = mail;
            }
            None => {
                debug!("Inserting mail {}", mail.id);
                self.mails.push(mail);
            }
        }
    }

    /// Removes the record if present. Returns the removed record, `None` when
    /// the id was unknown.
    pub fn delete(&mut self, id: &str) -> Option<Mail> {
        let position = self.mails.iter().position(|mail| mail.id == id)?;
        debug!("Removing mail {}", id);
        Some(self.mails.remove(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mail> {
        self.mails.iter()
    }

    pub fn len(&self) -> usize {
        self.mails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mails.is_empty()
    }
}
