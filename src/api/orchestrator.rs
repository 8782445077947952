//! Runs backend actions through a shared validate → load → result/error state machine.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

use super::actions::{Action, ActionKind, Reply};
use super::error::{ProtocolError, TransportError, ValidationError};
use super::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Loading,
    Succeeded,
    Failed,
}

/// What the UI shows for one action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Panel {
    pub phase: Phase,
    pub busy: bool,
    pub output: Option<String>,
    /// Output shown before the current exchange started, restored if it fails in transport.
    restore: Option<String>,
    /// Token of the most recent invocation; only its exchange may update the panel.
    latest: u64,
}

/// How an invocation ended.
#[derive(Debug)]
pub enum Outcome {
    /// The primary input was empty; no request was sent.
    Rejected(ValidationError),
    /// The backend succeeded; the text is rendered verbatim.
    Succeeded(String),
    /// The backend reported a failure; `rendered` replaces the result.
    Reported {
        rendered: String,
        error: ProtocolError,
    },
    /// The exchange failed; `alert` must be shown to the user.
    Alerted {
        alert: &'static str,
        error: TransportError,
    },
    /// A later invocation of the same action started before this one finished.
    Superseded,
}

/// Drives generate/optimize/test requests and tracks a panel per action.
///
/// Re-invoking an action while a request is in flight starts a second,
/// independent exchange. The most recent invocation always owns the panel:
/// results from earlier invocations are dropped whenever they arrive.
pub struct RequestOrchestrator<T> {
    transport: T,
    panels: Mutex<HashMap<ActionKind, Panel>>,
}

impl<T: Transport> RequestOrchestrator<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            panels: Mutex::new(HashMap::new()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Snapshot of the panel for `kind`.
    pub fn panel(&self, kind: ActionKind) -> Panel {
        self.panels().get(&kind).cloned().unwrap_or_default()
    }

    fn panels(&self) -> MutexGuard<'_, HashMap<ActionKind, Panel>> {
        self.panels.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs action `A` with `input`.
    pub async fn run<A: Action>(&self, input: &A::Input) -> Outcome {
        let kind = A::KIND;
        let token = match self.begin(kind, A::primary_text(input)) {
            Ok(token) => token,
            Err(rejected) => return Outcome::Rejected(rejected),
        };

        let result = match A::payload(input) {
            Ok(body) => {
                debug!(action = %kind, token, endpoint = kind.endpoint(), "sending request");
                self.transport.post_json(kind.endpoint(), body).await
            }
            Err(e) => Err(TransportError::from(e)),
        };
        let reply = result
            .and_then(|value| Reply::<A::Reply>::from_value(value).map_err(TransportError::from));

        let mut panels = self.panels();
        let panel = panels.entry(kind).or_default();
        if panel.latest != token {
            warn!(action = %kind, token, latest = panel.latest, "dropping superseded response");
            return Outcome::Superseded;
        }
        panel.busy = false;

        match reply {
            Ok(Reply::Success(payload)) => {
                let text = A::into_output(payload);
                panel.phase = Phase::Succeeded;
                panel.output = Some(text.clone());
                panel.restore = None;
                Outcome::Succeeded(text)
            }
            Ok(Reply::Failure { detail }) => {
                let rendered = format!("{}: {}", kind.error_prefix(), detail);
                debug!(action = %kind, %detail, "backend reported failure");
                panel.phase = Phase::Failed;
                panel.output = Some(rendered.clone());
                panel.restore = None;
                Outcome::Reported {
                    rendered,
                    error: ProtocolError { detail },
                }
            }
            Err(error) => {
                warn!(action = %kind, %error, "request failed");
                panel.phase = Phase::Failed;
                panel.output = panel.restore.take();
                Outcome::Alerted {
                    alert: kind.alert_message(),
                    error,
                }
            }
        }
    }

    /// Validates the primary input and moves the panel into `Loading`.
    fn begin(&self, kind: ActionKind, primary: &str) -> Result<u64, ValidationError> {
        let mut panels = self.panels();
        let panel = panels.entry(kind).or_default();

        let resume = if panel.busy { Phase::Loading } else { Phase::Idle };
        panel.phase = Phase::Validating;
        if primary.trim().is_empty() {
            panel.phase = resume;
            return Err(ValidationError::new(kind.validation_message()));
        }

        if !panel.busy {
            panel.restore = panel.output.take();
        }
        panel.output = None;
        panel.busy = true;
        panel.phase = Phase::Loading;
        panel.latest += 1;
        Ok(panel.latest)
    }
}
