// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Draft lifecycle state machine.
//!
//! A mail is either a draft (optionally tagged for review) or sent. Each
//! command has exactly one transition function, and each transition is a pure
//! function of the current record and the edited field values: it returns the
//! next record or a typed failure, never a half-applied one. Persisting the
//! result is the caller's job.

use serde::{Deserialize, Serialize};

use crate::error::{MailroomError, MailroomResult};
use crate::models::{Mail, MailEdits, Reviewer, Section, NOW_LABEL};

/// Lifecycle state of a mail record. `Sent` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DraftState {
    Draft { review_tag: Option<Reviewer> },
    Sent,
}

impl DraftState {
    pub fn of(mail: &Mail) -> Self {
        match mail.kind {
            Section::Draft => DraftState::Draft {
                review_tag: mail.review_tag,
            },
            Section::Sent => DraftState::Sent,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DraftState::Sent)
    }
}

/// Commands that move a mail through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<'a> {
    SaveAsDraft,
    TagForReview(&'a str),
    Send,
}

impl Transition<'_> {
    fn verb(&self) -> &'static str {
        match self {
            Transition::SaveAsDraft => "save",
            Transition::TagForReview(_) => "tag",
            Transition::Send => "send",
        }
    }
}

/// Computes the record that results from applying `transition` to `mail`.
pub fn apply(mail: &Mail, edits: &MailEdits, transition: Transition<'_>) -> MailroomResult<Mail> {
    if DraftState::of(mail).is_terminal() {
        return Err(MailroomError::sent_is_terminal(&mail.id, transition.verb()));
    }

    let mut next = mail.clone();
    edits.apply_to(&mut next);
    next.timestamp = NOW_LABEL.to_string();

    match transition {
        // Tag is kept as is; only tagging or sending changes it.
        Transition::SaveAsDraft => {}
        Transition::TagForReview(reviewer) => {
            next.review_tag = Some(reviewer.parse::<Reviewer>()?);
        }
        Transition::Send => {
            next.kind = Section::Sent;
            next.review_tag = None;
            next.is_read = true;
        }
    }

    Ok(next)
}

pub fn save_as_draft(mail: &Mail, edits: &MailEdits) -> MailroomResult<Mail> {
    apply(mail, edits, Transition::SaveAsDraft)
}

pub fn tag_for_review(mail: &Mail, edits: &MailEdits, reviewer: &str) -> MailroomResult<Mail> {
    apply(mail, edits, Transition::TagForReview(reviewer))
}

pub fn send(mail: &Mail, edits: &MailEdits) -> MailroomResult<Mail> {
    apply(mail, edits, Transition::Send)
}

/// Checks that `mail` may be removed from the store.
pub fn ensure_deletable(mail: &Mail) -> MailroomResult<()> {
    match DraftState::of(mail) {
        DraftState::Draft { .. } => Ok(()),
        DraftState::Sent => Err(MailroomError::sent_is_terminal(&mail.id, "delete")),
    }
}
