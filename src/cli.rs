//! Defines the command-line interface structure using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::api::ActionKind;
use crate::ui::Tab;

#[derive(Parser)]
#[command(
    name = "prompt-studio",
    version,
    about = "Generate, optimize and test AI prompts, and keep a library of the good ones"
)]
pub struct Cli {
    /// Base URL of the prompt backend
    #[arg(long, global = true, env = "PROMPT_STUDIO_SERVER")]
    pub server: Option<String>,
    /// Path of the prompt library file
    #[arg(long, global = true, env = "PROMPT_STUDIO_LIBRARY")]
    pub library: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Generate a prompt from a goal
    Generate(GenerateArgs),
    /// Optimize an existing prompt
    Optimize(OptimizeArgs),
    /// Send a prompt to a model and show its answer
    Test(TestArgs),
    /// Save a prompt to the library
    Save(SaveArgs),
    /// List saved prompts, newest first
    List {
        #[arg(long, help = "Only show prompts for this model ('all' for every model)")]
        model: Option<String>,
    },
    /// Search saved prompts by name, description, tag or content
    Search {
        query: Vec<String>,
        #[arg(long, default_value = "all", help = "Only show prompts for this model")]
        model: String,
    },
    /// Delete a saved prompt by ID
    Delete {
        id: u64,
        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },
    /// Copy a saved prompt to the clipboard
    Copy { id: u64 },
    /// Test a saved prompt with the model it was written for
    Use {
        id: u64,
        #[arg(long, help = "Test with this model instead of the saved one")]
        model: Option<String>,
    },
    /// Start an interactive session (REPL)
    Interactive,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// What the prompt should achieve
    pub goal: Vec<String>,
    /// Target model (defaults to the configured model)
    #[arg(long)]
    pub model: Option<String>,
    /// Additional context for the prompt
    #[arg(long, default_value = "")]
    pub context: String,
    /// concise, detailed or step-by-step
    #[arg(long, default_value = "detailed")]
    pub style: String,
    /// Formats to include: standard, persona, constraints, examples
    #[arg(long = "format")]
    pub formats: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// The prompt to optimize
    pub prompt: Vec<String>,
    #[arg(long)]
    pub model: Option<String>,
    /// minimal, balanced or maximum
    #[arg(long, default_value = "balanced")]
    pub level: String,
}

#[derive(Args, Debug, Clone)]
pub struct TestArgs {
    /// The prompt to send
    pub prompt: Vec<String>,
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SaveArgs {
    /// Prompt text; opens an editor when omitted
    pub prompt: Vec<String>,
    /// Name of the prompt; asked interactively when omitted
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
    #[arg(long)]
    pub model: Option<String>,
}

/// Where a result to save or test comes from.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Source {
    Generate,
    Optimize,
}

impl From<Source> for ActionKind {
    fn from(source: Source) -> Self {
        match source {
            Source::Generate => ActionKind::Generate,
            Source::Optimize => ActionKind::Optimize,
        }
    }
}

/// One line typed in the interactive session.
#[derive(Parser)]
#[command(name = "ps", no_binary_name = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCmd,
}

#[derive(Subcommand)]
pub enum ReplCmd {
    /// Switch tab: generate, optimize, test or library
    Tab { tab: Tab },
    /// Generate a prompt from a goal
    Generate(GenerateArgs),
    /// Optimize an existing prompt
    Optimize(OptimizeArgs),
    /// Test a prompt; without text, runs the prompt loaded into the Test tab
    Test(TestArgs),
    /// Load the last generated or optimized prompt into the Test tab
    Send { from: Source },
    /// Save the last generated or optimized prompt to the library
    Save { from: Option<Source> },
    /// Show the library
    Library,
    /// Search the library
    Search {
        query: Vec<String>,
        #[arg(long, default_value = "all")]
        model: String,
    },
    /// Delete a saved prompt
    Delete {
        id: u64,
        #[arg(long, short)]
        yes: bool,
    },
    /// Load a saved prompt into the Test tab
    Use { id: u64 },
    /// Copy a saved prompt, or the current tab's result, to the clipboard
    Copy { id: Option<u64> },
}
