// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MailroomError;

/// Display timestamp written by every lifecycle transition.
pub const NOW_LABEL: &str = "now";

/// Top-level mailbox partition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    F2p,
    P2f,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::F2p => "f2p",
            Category::P2f => "p2f",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MailroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f2p" => Ok(Category::F2p),
            "p2f" => Ok(Category::P2f),
            other => Err(MailroomError::Validation(format!("Unknown category: {}", other))),
        }
    }
}

/// Mailbox sub-partition. Doubles as the kind of a mail record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Sent,
    Draft,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Sent => "sent",
            Section::Draft => "draft",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = MailroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sent" => Ok(Section::Sent),
            "draft" | "drafts" => Ok(Section::Draft),
            other => Err(MailroomError::Validation(format!("Unknown section: {}", other))),
        }
    }
}

/// Fixed set of people a draft can be handed to for review.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Reviewer {
    Manager,
    Legal,
    Marketing,
}

impl Reviewer {
    pub const ALL: [Reviewer; 3] = [Reviewer::Manager, Reviewer::Legal, Reviewer::Marketing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Reviewer::Manager => "manager",
            Reviewer::Legal => "legal",
            Reviewer::Marketing => "marketing",
        }
    }

    /// Label shown in the reviewer picker.
    pub fn label(&self) -> &'static str {
        match self {
            Reviewer::Manager => "Manager",
            Reviewer::Legal => "Legal Team",
            Reviewer::Marketing => "Marketing",
        }
    }
}

impl fmt::Display for Reviewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reviewer {
    type Err = MailroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(MailroomError::Validation(
                "A reviewer must be selected before tagging a draft for review".to_string(),
            ));
        }
        Reviewer::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| MailroomError::Validation(format!("Unknown reviewer: {}", value)))
    }
}

/// A single outbox record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mail {
    pub id: String,
    pub sender: String,
    pub subject: String,
    pub preview: String,
    pub timestamp: String,
    pub is_read: bool,
    pub category: Category,
    pub kind: Section,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_tag: Option<Reviewer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

impl Mail {
    pub fn is_draft(&self) -> bool {
        self.kind == Section::Draft
    }

    pub fn is_sent(&self) -> bool {
        self.kind == Section::Sent
    }

    pub fn belongs_to(&self, category: Category, section: Section) -> bool {
        self.category == category && self.kind == section
    }
}

/// User-entered field values handed to a lifecycle transition.
///
/// `None` keeps the current value of the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MailEdits {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
}

impl MailEdits {
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    /// Writes the edited fields onto `mail`. An empty recipient clears it.
    pub(crate) fn apply_to(&self, mail: &mut Mail) {
        if let Some(subject) = &self.subject {
            mail.subject = subject.clone();
        }
        if let Some(body) = &self.body {
            mail.preview = body.clone();
        }
        if let Some(sender) = &self.sender {
            mail.sender = sender.clone();
        }
        if let Some(recipient) = &self.recipient {
            let recipient = recipient.trim();
            mail.recipient = if recipient.is_empty() {
                None
            } else {
                Some(recipient.to_string())
            };
        }
    }
}
