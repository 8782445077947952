//! Library API: the prompt library, its search filter and the backend request orchestrator.

mod actions;
mod error;
mod orchestrator;
mod search;
mod store;
mod transport;

pub use actions::{
    Action, ActionKind, Generate, GenerateRequest, GeneratedPrompt, Optimize, OptimizeRequest,
    OptimizedPrompt, Reply, Test, TestRequest, TestResult, OPTIMIZATION_NOTES, SUCCESS_STATUS,
};
pub use error::{ProtocolError, StoreError, TransportError, ValidationError};
pub use orchestrator::{Outcome, Panel, Phase, RequestOrchestrator};
pub use search::{filter, ModelFilter};
pub use store::{NewEntry, PromptLibraryStore};
pub use transport::{HttpTransport, Transport};
