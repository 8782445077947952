use crate::api::{Test, TestRequest};
use crate::cli::TestArgs;
use crate::commands::action::{join_words, perform};
use crate::core::storage::AppCtx;

pub fn request(args: &TestArgs, default_model: &str) -> TestRequest {
    TestRequest::new(&join_words(&args.prompt))
        .model(args.model.as_deref().unwrap_or(default_model))
}

/// Send a prompt to the selected model and print its answer.
pub async fn run(ctx: &AppCtx, args: &TestArgs) -> Result<(), String> {
    let orchestrator = ctx.orchestrator()?;
    perform::<Test, _>(&orchestrator, &request(args, &ctx.config.default_model)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_model_wins_over_default() {
        let args = TestArgs {
            prompt: vec!["  hello ".into()],
            model: Some("gemini".into()),
        };
        assert_eq!(request(&args, "chatgpt"), TestRequest::new("hello").model("gemini"));
    }
}
