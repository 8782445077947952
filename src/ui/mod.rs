//! Terminal UI state: tabs, the save dialog, toasts, and rendering.

pub mod controller;
pub mod modal;
pub mod render;
pub mod tabs;
pub mod toast;

pub use controller::{EmptyLibrary, LibraryView, UiController};
pub use modal::{SaveDialog, SaveDraft};
pub use tabs::{Tab, Tabs};
pub use toast::{ToastState, Toaster};
