//! The three backend actions and their request/reply contracts.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::core::config::DEFAULT_MODEL;

/// Value of the `status` field on a successful reply.
pub const SUCCESS_STATUS: &str = "success";

/// Improvement notes shown beside every optimized prompt.
pub const OPTIMIZATION_NOTES: [&str; 4] = [
    "Added clear structure and formatting",
    "Enhanced clarity of instructions",
    "Optimized for specific model capabilities",
    "Added constraints for more focused output",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Generate,
    Optimize,
    Test,
}

impl ActionKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            ActionKind::Generate => "/api/generate",
            ActionKind::Optimize => "/api/optimize",
            ActionKind::Test => "/api/test-prompt",
        }
    }

    /// Shown when the primary input is empty.
    pub fn validation_message(self) -> &'static str {
        match self {
            ActionKind::Generate => "Please enter your goal",
            ActionKind::Optimize => "Please enter your existing prompt",
            ActionKind::Test => "Please enter a prompt to test",
        }
    }

    /// Prefixes the `detail` of a failed reply.
    pub fn error_prefix(self) -> &'static str {
        match self {
            ActionKind::Generate => "Error generating prompt",
            ActionKind::Optimize => "Error optimizing prompt",
            ActionKind::Test => "Error testing prompt",
        }
    }

    /// Raised when the exchange itself fails.
    pub fn alert_message(self) -> &'static str {
        match self {
            ActionKind::Generate => "An error occurred while generating the prompt",
            ActionKind::Optimize => "An error occurred while optimizing the prompt",
            ActionKind::Test => "An error occurred while testing the prompt",
        }
    }

    pub fn loading_text(self) -> &'static str {
        match self {
            ActionKind::Generate => "Generating prompt...",
            ActionKind::Optimize => "Optimizing prompt...",
            ActionKind::Test => "Testing prompt...",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::Generate => "generate",
            ActionKind::Optimize => "optimize",
            ActionKind::Test => "test",
        })
    }
}

/// A backend action run by the orchestrator.
pub trait Action {
    const KIND: ActionKind;
    type Input: Serialize + Send + Sync;
    type Reply: DeserializeOwned;

    /// The text that must be non-empty (after trimming) for the action to run.
    fn primary_text(input: &Self::Input) -> &str;

    /// Extracts the text to render from a successful reply.
    fn into_output(reply: Self::Reply) -> String;

    fn payload(input: &Self::Input) -> Result<Value, serde_json::Error> {
        serde_json::to_value(input)
    }
}

/// A reply from the backend: success with the action's payload, or a reported failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Success(T),
    Failure { detail: String },
}

impl<T: DeserializeOwned> Reply<T> {
    /// Interprets a parsed JSON body.
    ///
    /// Errors only when the status is a success but the payload is missing or mistyped.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.get("status").and_then(Value::as_str) == Some(SUCCESS_STATUS) {
            return Ok(Reply::Success(serde_json::from_value(value)?));
        }
        let detail = match value.get("detail") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "unknown error".to_string(),
            Some(other) => other.to_string(),
        };
        Ok(Reply::Failure { detail })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub goal: String,
    pub target_model: String,
    pub context: String,
    pub style: String,
    pub formats: Vec<String>,
}

impl GenerateRequest {
    pub fn new(goal: &str) -> Self {
        Self {
            goal: goal.trim().to_string(),
            target_model: DEFAULT_MODEL.to_string(),
            context: String::new(),
            style: "detailed".to_string(),
            formats: vec!["standard".to_string()],
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.target_model = model.into();
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Replaces the format list; an empty list keeps the default.
    pub fn formats(mut self, formats: Vec<String>) -> Self {
        if !formats.is_empty() {
            self.formats = formats;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizeRequest {
    pub prompt: String,
    pub target_model: String,
    pub optimization_level: String,
}

impl OptimizeRequest {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.trim().to_string(),
            target_model: DEFAULT_MODEL.to_string(),
            optimization_level: "balanced".to_string(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.target_model = model.into();
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.optimization_level = level.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRequest {
    pub prompt: String,
    pub target_model: String,
}

impl TestRequest {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.trim().to_string(),
            target_model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.target_model = model.into();
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneratedPrompt {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct OptimizedPrompt {
    pub optimized_prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct TestResult {
    pub result: String,
}

pub struct Generate;
pub struct Optimize;
pub struct Test;

impl Action for Generate {
    const KIND: ActionKind = ActionKind::Generate;
    type Input = GenerateRequest;
    type Reply = GeneratedPrompt;

    fn primary_text(input: &GenerateRequest) -> &str {
        &input.goal
    }

    fn into_output(reply: GeneratedPrompt) -> String {
        reply.prompt
    }
}

impl Action for Optimize {
    const KIND: ActionKind = ActionKind::Optimize;
    type Input = OptimizeRequest;
    type Reply = OptimizedPrompt;

    fn primary_text(input: &OptimizeRequest) -> &str {
        &input.prompt
    }

    fn into_output(reply: OptimizedPrompt) -> String {
        reply.optimized_prompt
    }
}

impl Action for Test {
    const KIND: ActionKind = ActionKind::Test;
    type Input = TestRequest;
    type Reply = TestResult;

    fn primary_text(input: &TestRequest) -> &str {
        &input.prompt
    }

    fn into_output(reply: TestResult) -> String {
        reply.result
    }
}
