//! Ties tabs, the save dialog, the library view and toasts to the prompt library.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

use super::modal::SaveDialog;
use super::tabs::{Tab, Tabs};
use super::toast::Toaster;
use crate::api::{
    filter, ActionKind, ModelFilter, PromptLibraryStore, StoreError, TestRequest, ValidationError,
};
use crate::core::config::DEFAULT_MODEL;
use crate::core::storage::PromptEntry;

/// Why the library view has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyLibrary {
    NoPrompts,
    NoMatches,
}

impl EmptyLibrary {
    pub fn message(self) -> &'static str {
        match self {
            EmptyLibrary::NoPrompts => "Your library is empty. Save a generated or optimized prompt to see it here.",
            EmptyLibrary::NoMatches => "No prompts found matching your criteria",
        }
    }
}

#[derive(Debug, Default)]
pub struct LibraryView {
    pub entries: Vec<PromptEntry>,
    pub empty: Option<EmptyLibrary>,
}

struct LastOutput {
    text: String,
    model: String,
}

pub struct UiController {
    store: PromptLibraryStore,
    tabs: Tabs,
    dialog: SaveDialog,
    toaster: Toaster,
    library: LibraryView,
    outputs: HashMap<ActionKind, LastOutput>,
    test_input: Option<TestRequest>,
}

impl UiController {
    pub fn new(store: PromptLibraryStore, toast_duration: Duration) -> Self {
        Self {
            store,
            tabs: Tabs::default(),
            dialog: SaveDialog::default(),
            toaster: Toaster::new(toast_duration),
            library: LibraryView::default(),
            outputs: HashMap::new(),
            test_input: None,
        }
    }

    pub fn store(&self) -> &PromptLibraryStore {
        &self.store
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    /// Switches tab. Entering the library reloads it with no filter.
    pub fn activate(&mut self, tab: Tab) -> Result<(), StoreError> {
        if self.tabs.activate(tab) {
            self.reload_library()?;
        }
        Ok(())
    }

    pub fn library(&self) -> &LibraryView {
        &self.library
    }

    pub fn reload_library(&mut self) -> Result<&LibraryView, StoreError> {
        self.refresh(&ModelFilter::All, "", EmptyLibrary::NoPrompts)
    }

    pub fn search(&mut self, model: &ModelFilter, term: &str) -> Result<&LibraryView, StoreError> {
        self.refresh(model, term, EmptyLibrary::NoMatches)
    }

    fn refresh(
        &mut self,
        model: &ModelFilter,
        term: &str,
        when_empty: EmptyLibrary,
    ) -> Result<&LibraryView, StoreError> {
        let entries = filter(&self.store.list()?, model, term);
        debug!(%model, term, count = entries.len(), "library view refreshed");
        self.library = LibraryView {
            empty: entries.is_empty().then_some(when_empty),
            entries,
        };
        Ok(&self.library)
    }

    /// Remembers the latest rendered result of an action and the model it targeted.
    pub fn record_output(&mut self, kind: ActionKind, text: impl Into<String>, model: impl Into<String>) {
        self.outputs.insert(
            kind,
            LastOutput {
                text: text.into(),
                model: model.into(),
            },
        );
    }

    pub fn last_output(&self, kind: ActionKind) -> Option<&str> {
        self.outputs.get(&kind).map(|o| o.text.as_str())
    }

    /// Opens the save dialog on the latest generated or optimized prompt.
    pub fn open_save(&mut self, kind: ActionKind) -> Result<(), ValidationError> {
        let output = match kind {
            ActionKind::Generate | ActionKind::Optimize => self.outputs.get(&kind),
            ActionKind::Test => None,
        };
        let Some(output) = output else {
            return Err(ValidationError::new(format!("Nothing to save yet; run {} first", kind)));
        };
        self.dialog
            .open(output.text.clone(), Some(output.model.clone()));
        Ok(())
    }

    pub fn dialog(&self) -> &SaveDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut SaveDialog {
        &mut self.dialog
    }

    /// Saves the dialog's draft. On any error the dialog stays open with its draft.
    pub fn confirm_save(&mut self) -> Result<PromptEntry, StoreError> {
        let entry = self.dialog.draft_entry()?;
        let saved = self.store.save(entry)?;
        self.dialog.finish();
        self.notify("Prompt saved to library!");
        if self.tabs.is_active(Tab::Library) {
            self.reload_library()?;
        }
        Ok(saved)
    }

    /// Deletes an entry and reloads the library view.
    pub fn delete(&mut self, id: u64) -> Result<bool, StoreError> {
        let removed = self.store.delete(id)?;
        self.reload_library()?;
        if removed {
            self.notify("Prompt deleted");
        }
        Ok(removed)
    }

    /// Loads a saved prompt into the test tab.
    pub fn use_entry(&mut self, id: u64) -> Result<TestRequest, StoreError> {
        let entry = self.store.get(id)?;
        let model = entry.model.as_deref().unwrap_or(DEFAULT_MODEL);
        let request = TestRequest::new(&entry.prompt).model(model);
        self.load_test(request.clone());
        Ok(request)
    }

    /// Sends the latest output of `kind` to the test tab.
    pub fn send_to_test(&mut self, kind: ActionKind) -> Option<TestRequest> {
        let output = self.outputs.get(&kind)?;
        let request = TestRequest::new(&output.text).model(output.model.clone());
        self.load_test(request.clone());
        Some(request)
    }

    fn load_test(&mut self, request: TestRequest) {
        self.test_input = Some(request);
        self.tabs.activate(Tab::Test);
    }

    /// Prompt and model currently filled into the test tab.
    pub fn test_input(&self) -> Option<&TestRequest> {
        self.test_input.as_ref()
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.toaster.show(message, Instant::now());
    }

    /// The toast currently on screen, if any.
    pub fn toast(&mut self) -> Option<String> {
        self.toaster.visible(Instant::now()).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NewEntry;
    use crate::core::storage::MemorySlot;

    fn controller() -> UiController {
        UiController::new(PromptLibraryStore::new(MemorySlot::new()), Duration::from_secs(60))
    }

    fn seed(ctrl: &UiController, name: &str, model: Option<&str>) -> PromptEntry {
        ctrl.store()
            .save(NewEntry {
                name: name.into(),
                prompt: format!("{name} prompt"),
                model: model.map(str::to_string),
                ..NewEntry::default()
            })
            .unwrap()
    }

    #[test]
    fn library_tab_reloads_on_activation() {
        let mut ctrl = controller();
        ctrl.activate(Tab::Library).unwrap();
        assert_eq!(ctrl.library().empty, Some(EmptyLibrary::NoPrompts));

        seed(&ctrl, "one", Some("chatgpt"));
        ctrl.activate(Tab::Generate).unwrap();
        assert_eq!(ctrl.library().empty, Some(EmptyLibrary::NoPrompts));

        ctrl.activate(Tab::Library).unwrap();
        assert_eq!(ctrl.library().entries.len(), 1);
        assert_eq!(ctrl.library().empty, None);
    }

    #[test]
    fn search_reports_no_matches_distinctly() {
        let mut ctrl = controller();
        seed(&ctrl, "Launch email", Some("claude"));

        let view = ctrl.search(&ModelFilter::Model("chatgpt".into()), "").unwrap();
        assert!(view.entries.is_empty());
        assert_eq!(view.empty, Some(EmptyLibrary::NoMatches));

        let view = ctrl.search(&ModelFilter::All, "launch").unwrap();
        assert_eq!(view.entries.len(), 1);
    }

    #[test]
    fn save_flow_requires_name_and_reloads_active_library() {
        let mut ctrl = controller();
        ctrl.record_output(ActionKind::Generate, "Tagline: Move more", "gemini");
        ctrl.activate(Tab::Library).unwrap();
        ctrl.open_save(ActionKind::Generate).unwrap();

        let err = ctrl.confirm_save().unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(ctrl.dialog().is_open());
        assert!(ctrl.store().list().unwrap().is_empty());

        ctrl.dialog_mut().draft_mut().name = "Tagline".into();
        let saved = ctrl.confirm_save().unwrap();

        assert_eq!(saved.prompt, "Tagline: Move more");
        assert_eq!(saved.model.as_deref(), Some("gemini"));
        assert!(!ctrl.dialog().is_open());
        assert_eq!(ctrl.library().entries, vec![saved]);
        assert_eq!(ctrl.toast().as_deref(), Some("Prompt saved to library!"));
    }

    #[test]
    fn failed_store_keeps_dialog_and_draft() {
        let mut ctrl = UiController::new(
            PromptLibraryStore::new(MemorySlot::with_raw("{\"broken\":")),
            Duration::from_secs(60),
        );
        ctrl.record_output(ActionKind::Generate, "Tagline: Move more", "gemini");
        ctrl.open_save(ActionKind::Generate).unwrap();
        ctrl.dialog_mut().draft_mut().name = "My name".into();
        ctrl.dialog_mut().draft_mut().tags = "fitness".into();

        let err = ctrl.confirm_save().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
        assert!(ctrl.dialog().is_open());
        assert_eq!(ctrl.dialog().prompt(), Some("Tagline: Move more"));
        assert_eq!(ctrl.dialog_mut().draft_mut().name, "My name");
        assert_eq!(ctrl.dialog_mut().draft_mut().tags, "fitness");
        assert_eq!(ctrl.toast(), None);
    }

    #[test]
    fn nothing_to_save_before_a_result() {
        let mut ctrl = controller();
        assert!(ctrl.open_save(ActionKind::Optimize).is_err());
        ctrl.record_output(ActionKind::Test, "model output", "chatgpt");
        assert!(ctrl.open_save(ActionKind::Test).is_err());
        assert!(!ctrl.dialog().is_open());
    }

    #[test]
    fn delete_reloads_and_toasts_only_when_removed() {
        let mut ctrl = controller();
        let entry = seed(&ctrl, "gone", None);

        assert!(!ctrl.delete(entry.id + 100).unwrap());
        assert_eq!(ctrl.toast(), None);

        assert!(ctrl.delete(entry.id).unwrap());
        assert_eq!(ctrl.library().empty, Some(EmptyLibrary::NoPrompts));
        assert_eq!(ctrl.toast().as_deref(), Some("Prompt deleted"));
    }

    #[test]
    fn use_entry_switches_to_test_with_default_model() {
        let mut ctrl = controller();
        let entry = seed(&ctrl, "no model", None);
        ctrl.activate(Tab::Library).unwrap();

        let request = ctrl.use_entry(entry.id).unwrap();
        assert_eq!(request.prompt, "no model prompt");
        assert_eq!(request.target_model, DEFAULT_MODEL);
        assert_eq!(ctrl.active_tab(), Tab::Test);
        assert_eq!(ctrl.test_input(), Some(&request));
    }

    #[test]
    fn send_to_test_carries_output_and_model() {
        let mut ctrl = controller();
        assert!(ctrl.send_to_test(ActionKind::Optimize).is_none());

        ctrl.record_output(ActionKind::Optimize, "Optimized text", "mistral");
        let request = ctrl.send_to_test(ActionKind::Optimize).unwrap();
        assert_eq!(request, TestRequest::new("Optimized text").model("mistral"));
        assert_eq!(ctrl.active_tab(), Tab::Test);
    }
}
