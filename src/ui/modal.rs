//! The save-prompt dialog.

use crate::api::{NewEntry, ValidationError};
use crate::core::utils::parse_tags;

/// Text typed into the dialog's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveDraft {
    pub name: String,
    pub description: String,
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum DialogState {
    #[default]
    Closed,
    Open {
        prompt: String,
        model: Option<String>,
    },
}

#[derive(Debug, Default)]
pub struct SaveDialog {
    state: DialogState,
    draft: SaveDraft,
}

impl SaveDialog {
    /// Opens the dialog for `prompt`, produced for `model`.
    pub fn open(&mut self, prompt: impl Into<String>, model: Option<String>) {
        self.state = DialogState::Open {
            prompt: prompt.into(),
            model,
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open { .. })
    }

    pub fn prompt(&self) -> Option<&str> {
        match &self.state {
            DialogState::Open { prompt, .. } => Some(prompt),
            DialogState::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> &mut SaveDraft {
        &mut self.draft
    }

    /// Dismisses without saving. The draft is kept for the next opening.
    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    /// The close button; same as cancel.
    pub fn close(&mut self) {
        self.cancel();
    }

    /// Builds a library entry from the draft without changing the dialog.
    ///
    /// With an empty name the dialog stays open and nothing changes.
    pub fn draft_entry(&self) -> Result<NewEntry, ValidationError> {
        let DialogState::Open { prompt, model } = &self.state else {
            return Err(ValidationError::new("There is no prompt to save"));
        };
        let name = self.draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::new("Please provide a name for your prompt"));
        }

        Ok(NewEntry {
            name: name.to_string(),
            description: self.draft.description.trim().to_string(),
            tags: parse_tags(&self.draft.tags),
            prompt: prompt.clone(),
            model: model.clone(),
        })
    }

    /// Closes the dialog and clears the draft once the entry is stored.
    pub fn finish(&mut self) {
        self.state = DialogState::Closed;
        self.draft = SaveDraft::default();
    }

    /// Builds the entry and finishes the dialog in one step.
    pub fn confirm(&mut self) -> Result<NewEntry, ValidationError> {
        let entry = self.draft_entry()?;
        self.finish();
        Ok(entry)
    }
}
