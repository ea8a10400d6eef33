// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{MailroomError, MailroomResult};
use crate::models::{Category, Contact, Conversation, Direction, Mail, Reviewer, Section};

/// Initial records handed to the stores at start-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub mails: Vec<Mail>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    /// contact id -> conversation history
    #[serde(default)]
    pub conversations: HashMap<String, Vec<Conversation>>,
}

impl Seed {
    /// Loads a seed from a JSON file with `mails`, `contacts` and
    /// `conversations` keys. Missing keys are empty.
    pub fn from_json_file(path: impl AsRef<Path>) -> MailroomResult<Self> {
        let path = path.as_ref();
        debug!("Loading seed from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let seed: Seed = serde_json::from_str(&contents)?;
        seed.validate()?;
        info!(
            "Loaded seed from {}: {} mails, {} contacts",
            path.display(),
            seed.mails.len(),
            seed.contacts.len()
        );
        Ok(seed)
    }

    /// Rejects records the lifecycle could never have produced.
    pub fn validate(&self) -> MailroomResult<()> {
        for mail in &self.mails {
            if mail.is_sent() && mail.review_tag.is_some() {
                return Err(MailroomError::Validation(format!(
                    "seed mail {} is sent but still carries a review tag",
                    mail.id
                )));
            }
        }
        Ok(())
    }

    /// Demo data the outbox ships with.
    pub fn builtin() -> Self {
        let mails = vec![
            mail("1", "Welcome to F2P Platform", "Thank you for joining our free-to-play community...", "2 hours ago", true, Category::F2p, Section::Sent, None),
            mail("2", "Premium Features Available", "Unlock exclusive content with our pay-to-free model...", "4 hours ago", true, Category::P2f, Section::Sent, None),
            mail("3", "Re: Partnership Proposal", "Thanks for reaching out. I would be interested...", "1 day ago", true, Category::F2p, Section::Sent, None),
            mail("4", "Draft: Marketing Campaign Ideas", "Here are some initial thoughts on the upcoming campaign...", "2 days ago", false, Category::P2f, Section::Draft, Some(Reviewer::Manager)),
            mail("5", "Draft: F2P User Onboarding", "Welcome to our platform! Here is what you need to know...", "3 days ago", false, Category::F2p, Section::Draft, None),
        ];

        let contacts = vec![
            contact("1", "John Smith", "john@f2p.com", Category::F2p, "2 hours ago", "Welcome to F2P Platform", 5),
            contact("2", "Sarah Johnson", "sarah@p2f.com", Category::P2f, "4 hours ago", "Premium Features Available", 12),
            contact("3", "Mike Chen", "mike@f2p.com", Category::F2p, "1 day ago", "Partnership Proposal", 8),
            contact("4", "Emily Davis", "emily@p2f.com", Category::P2f, "2 days ago", "Marketing Campaign Ideas", 15),
            contact("5", "Alex Rodriguez", "alex@f2p.com", Category::F2p, "3 days ago", "Bug Report Follow-up", 3),
        ];

        let mut conversations = HashMap::new();
        conversations.insert(
            "1".to_string(),
            vec![
                conversation("1-1", "Welcome to F2P Platform", "2 hours ago", Direction::Sent,
                    "Thank you for joining our free-to-play community...",
                    "Hi John,\n\nThank you for joining our free-to-play community. Your account is ready to go."),
                conversation("1-2", "Re: Welcome to F2P Platform", "1 hour ago", Direction::Received,
                    "Thanks! Quick question about the starter pack...",
                    "Thanks! Quick question about the starter pack: is it available on mobile as well?"),
            ],
        );
        conversations.insert(
            "2".to_string(),
            vec![conversation("2-1", "Premium Features Available", "4 hours ago", Direction::Sent,
                "Unlock exclusive content with our pay-to-free model...",
                "Hi Sarah,\n\nUnlock exclusive content with our pay-to-free model. Details inside.")],
        );
        conversations.insert(
            "3".to_string(),
            vec![
                conversation("3-1", "Partnership Proposal", "2 days ago", Direction::Received,
                    "We would like to explore a partnership...",
                    "Hello,\n\nWe would like to explore a partnership around your F2P titles."),
                conversation("3-2", "Re: Partnership Proposal", "1 day ago", Direction::Sent,
                    "Thanks for reaching out. I would be interested...",
                    "Thanks for reaching out. I would be interested in a call next week."),
            ],
        );
        conversations.insert(
            "4".to_string(),
            vec![conversation("4-1", "Marketing Campaign Ideas", "2 days ago", Direction::Received,
                "Can you share the campaign outline?",
                "Hi,\n\nCan you share the campaign outline before Friday?")],
        );
        conversations.insert(
            "5".to_string(),
            vec![conversation("5-1", "Bug Report Follow-up", "3 days ago", Direction::Received,
                "The crash still happens on level 3...",
                "The crash still happens on level 3 after the latest patch.")],
        );

        Self {
            mails,
            contacts,
            conversations,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn mail(
    id: &str,
    subject: &str,
    preview: &str,
    timestamp: &str,
    is_read: bool,
    category: Category,
    kind: Section,
    review_tag: Option<Reviewer>,
) -> Mail {
    Mail {
        id: id.to_string(),
        sender: "me".to_string(),
        subject: subject.to_string(),
        preview: preview.to_string(),
        timestamp: timestamp.to_string(),
        is_read,
        category,
        kind,
        review_tag,
        recipient: None,
    }
}

fn contact(
    id: &str,
    name: &str,
    email: &str,
    category: Category,
    last_contact: &str,
    last_subject: &str,
    total_emails: u32,
) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        category,
        last_contact: last_contact.to_string(),
        last_subject: last_subject.to_string(),
        total_emails,
    }
}

fn conversation(
    id: &str,
    subject: &str,
    timestamp: &str,
    direction: Direction,
    preview: &str,
    content: &str,
) -> Conversation {
    Conversation {
        id: id.to_string(),
        subject: subject.to_string(),
        timestamp: timestamp.to_string(),
        direction,
        preview: preview.to_string(),
        content: content.to_string(),
    }
}
