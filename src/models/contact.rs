// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::mail::Category;
use crate::error::MailroomError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub category: Category,
    pub last_contact: String,
    pub last_subject: String,
    pub total_emails: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
}

/// One message in a contact's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub subject: String,
    pub timestamp: String,
    pub direction: Direction,
    pub preview: String,
    pub content: String,
}

/// Category filter of the contacts view. `All` is the wildcard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    F2p,
    P2f,
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::F2p => category == Category::F2p,
            CategoryFilter::P2f => category == Category::P2f,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::F2p => CategoryFilter::F2p,
            Category::P2f => CategoryFilter::P2f,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = MailroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(CategoryFilter::All),
            other => other.parse::<Category>().map(CategoryFilter::from),
        }
    }
}
