//! Contact form draft and validation.
//!
//! The form never leaves the browser; a valid submission clears the draft
//! and flips the form into its confirmation state.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Editable fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Why a field was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("Please enter a message")]
    MissingMessage,
}

impl ContactFieldError {
    #[must_use]
    pub fn field(&self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::MissingEmail | Self::InvalidEmail => ContactField::Email,
            Self::MissingMessage => ContactField::Message,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Validate every field, returning all problems in field order.
    #[must_use]
    pub fn validate(&self) -> Vec<ContactFieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ContactFieldError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ContactFieldError::MissingEmail);
        } else if !looks_like_email(email) {
            errors.push(ContactFieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(ContactFieldError::MissingMessage);
        }
        errors
    }
}

fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || raw.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// What the stored draft should become after a change to the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftSync<'a> {
    Save(&'a ContactDraft),
    Clear,
}

/// Form lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub draft: ContactDraft,
    pub errors: Vec<ContactFieldError>,
    pub sent: bool,
}

impl ContactState {
    /// Resume from a stored draft.
    #[must_use]
    pub fn restored(draft: ContactDraft) -> Self {
        Self { draft, ..Self::default() }
    }

    pub fn edit(&mut self, field: ContactField, value: String) {
        self.draft.set(field, value);
        self.errors.retain(|e| e.field() != field);
        self.sent = false;
    }

    /// Validate and, on success, clear the draft.
    ///
    /// Returns whether the submission was accepted.
    pub fn submit(&mut self) -> bool {
        self.errors = self.draft.validate();
        if !self.errors.is_empty() {
            return false;
        }
        log::info!("contact form accepted");
        self.draft = ContactDraft::default();
        self.sent = true;
        true
    }

    /// An empty draft (fresh, cleared, or just sent) is removed from storage.
    #[must_use]
    pub fn draft_sync(&self) -> DraftSync<'_> {
        if self.draft.is_empty() { DraftSync::Clear } else { DraftSync::Save(&self.draft) }
    }

    #[must_use]
    pub fn error_for(&self, field: ContactField) -> Option<&ContactFieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }
}
