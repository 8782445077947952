use clap::Parser;
use console::style;
use dialoguer::Input;
use tracing::debug;

use crate::api::{
    ActionKind, Generate, HttpTransport, ModelFilter, Optimize, RequestOrchestrator, Test,
    TestRequest,
};
use crate::cli::{ReplCmd, ReplLine, Source};
use crate::commands::action::{join_words, perform};
use crate::commands::{copy, delete, generate, optimize, save, test};
use crate::core::storage::AppCtx;
use crate::ui::render::{print_library, print_toast};
use crate::ui::{Tab, UiController};

struct Session<'a> {
    ctx: &'a AppCtx,
    ui: UiController,
    orchestrator: RequestOrchestrator<HttpTransport>,
}

/// Run the studio in interactive REPL mode.
pub async fn run(ctx: &AppCtx) -> Result<(), String> {
    let mut session = Session {
        ctx,
        ui: UiController::new(ctx.library(), ctx.config.toast_duration()),
        orchestrator: ctx.orchestrator()?,
    };

    println!(
        "Entering interactive mode against {}. Type 'help' for commands, 'exit' or 'quit' to leave.",
        style(session.orchestrator.transport().base_url()).cyan()
    );
    loop {
        if let Some(toast) = session.ui.toast() {
            print_toast(&toast);
        }
        let prompt = format!(
            "{}",
            style(format!("ps [{}] >", session.ui.active_tab())).blue().bold()
        );
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("Input error: {}", e))?;

        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let args = match shell_words::split(input) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("• Error parsing command: {}", e);
                continue;
            }
        };

        match ReplLine::try_parse_from(args) {
            Ok(line) => {
                if let Err(e) = session.handle(line.command).await {
                    eprintln!("• {}", e);
                }
            }
            Err(e) => {
                e.print().unwrap_or(());
            }
        }
    }
    Ok(())
}

impl Session<'_> {
    async fn handle(&mut self, command: ReplCmd) -> Result<(), String> {
        let default_model = self.ctx.config.default_model.clone();
        match command {
            ReplCmd::Tab { tab } => {
                self.ui.activate(tab).map_err(|e| e.to_string())?;
                if tab == Tab::Library {
                    print_library(self.ui.library());
                }
            }
            ReplCmd::Generate(args) => {
                self.ui.activate(Tab::Generate).map_err(|e| e.to_string())?;
                let request = generate::request(&args, &default_model);
                if let Some(text) = perform::<Generate, _>(&self.orchestrator, &request).await? {
                    self.ui
                        .record_output(ActionKind::Generate, text, request.target_model);
                }
            }
            ReplCmd::Optimize(args) => {
                self.ui.activate(Tab::Optimize).map_err(|e| e.to_string())?;
                let request = optimize::request(&args, &default_model);
                if let Some(text) = perform::<Optimize, _>(&self.orchestrator, &request).await? {
                    self.ui
                        .record_output(ActionKind::Optimize, text, request.target_model);
                }
            }
            ReplCmd::Test(args) => {
                self.ui.activate(Tab::Test).map_err(|e| e.to_string())?;
                let request = if args.prompt.is_empty() {
                    self.ui
                        .test_input()
                        .cloned()
                        .unwrap_or_else(|| TestRequest::new("").model(default_model.as_str()))
                } else {
                    test::request(&args, &default_model)
                };
                if let Some(text) = perform::<Test, _>(&self.orchestrator, &request).await? {
                    self.ui.record_output(ActionKind::Test, text, request.target_model);
                }
            }
            ReplCmd::Send { from } => {
                let kind = ActionKind::from(from);
                let request = self
                    .ui
                    .send_to_test(kind)
                    .ok_or_else(|| format!("Nothing to test yet; run {} first", kind))?;
                println!(
                    "{} Loaded into the Test tab for {}. Run 'test' to send it.",
                    style("•").green().bold(),
                    style(&request.target_model).cyan()
                );
            }
            ReplCmd::Save { from } => self.save(from)?,
            ReplCmd::Library => {
                self.ui.activate(Tab::Library).map_err(|e| e.to_string())?;
                print_library(self.ui.library());
            }
            ReplCmd::Search { query, model } => {
                let filter: ModelFilter = model.parse().unwrap_or_default();
                self.ui.activate(Tab::Library).map_err(|e| e.to_string())?;
                let view = self
                    .ui
                    .search(&filter, &join_words(&query))
                    .map_err(|e| e.to_string())?;
                print_library(view);
            }
            ReplCmd::Delete { id, yes } => {
                if yes || delete::confirm_delete() {
                    if !self.ui.delete(id).map_err(|e| e.to_string())? {
                        return Err(format!("No prompt with ID {}", id));
                    }
                    if self.ui.active_tab() == Tab::Library {
                        print_library(self.ui.library());
                    }
                }
            }
            ReplCmd::Use { id } => {
                let request = self.ui.use_entry(id).map_err(|e| e.to_string())?;
                println!(
                    "{} Prompt {} loaded into the Test tab for {}. Run 'test' to send it.",
                    style("•").green().bold(),
                    style(id).yellow(),
                    style(&request.target_model).cyan()
                );
            }
            ReplCmd::Copy { id: Some(id) } => {
                let entry = self.ui.store().get(id).map_err(|e| e.to_string())?;
                copy::copy_text(&entry.prompt)?;
                self.ui.notify("Prompt copied to clipboard!");
            }
            ReplCmd::Copy { id: None } => {
                let text = self.current_output()?;
                copy::copy_text(&text)?;
                self.ui.notify("Copied to clipboard!");
            }
        }
        Ok(())
    }

    /// Opens the save dialog on a result, asks for its fields and saves it.
    fn save(&mut self, from: Option<Source>) -> Result<(), String> {
        let kind = match from {
            Some(source) => ActionKind::from(source),
            None => match self.ui.active_tab() {
                Tab::Optimize => ActionKind::Optimize,
                _ => ActionKind::Generate,
            },
        };
        self.ui.open_save(kind).map_err(|e| e.to_string())?;
        loop {
            save::fill_draft(self.ui.dialog_mut().draft_mut())?;
            match self.ui.confirm_save() {
                Ok(saved) => {
                    debug!(id = saved.id, "saved from interactive session");
                    return Ok(());
                }
                Err(e) => {
                    eprintln!("• {}", e);
                    if !retry_save() {
                        // The draft survives cancel, so the next `save` starts from it.
                        self.ui.dialog_mut().cancel();
                        return Ok(());
                    }
                }
            }
        }
    }

    /// The latest result shown on the active tab.
    fn current_output(&self) -> Result<String, String> {
        let kind = match self.ui.active_tab() {
            Tab::Generate => ActionKind::Generate,
            Tab::Optimize => ActionKind::Optimize,
            Tab::Test => ActionKind::Test,
            Tab::Library => return Err("Pass a prompt ID to copy from the library".to_string()),
        };
        self.ui
            .last_output(kind)
            .map(str::to_string)
            .ok_or_else(|| "Nothing to copy yet".to_string())
    }
}

fn retry_save() -> bool {
    dialoguer::Confirm::new()
        .with_prompt("Try again?")
        .default(true)
        .interact()
        .unwrap_or(false)
}
