pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;

pub use api::{PromptLibraryStore, RequestOrchestrator, StoreError, TransportError};
pub use crate::core::storage::PromptEntry;
