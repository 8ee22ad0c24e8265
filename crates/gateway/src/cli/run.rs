//! `solace run` — one-shot execution command.
//!
//! Runs the full pipeline for a single message and prints the reply.
//! Useful for scripting and quick smoke checks without the server.

use std::sync::Arc;

use solace_domain::config::Config;
use solace_domain::convo::Utterance;

use crate::bootstrap;
use crate::runtime::pipeline;

/// Execute one pipeline turn and print the response.
///
/// This is the entry point for `solace run "message"`.
pub async fn run(config: Arc<Config>, message: String, json_output: bool) -> anyhow::Result<()> {
    let state = bootstrap::build_app_state(config).await?;

    let history = vec![Utterance::from(message)];
    let reply = pipeline::respond(
        state.classifier.as_ref(),
        state.llm.as_ref(),
        &history,
    )
    .await?;

    if json_output {
        let json = serde_json::to_string_pretty(&reply)
            .map_err(|e| anyhow::anyhow!("serializing reply: {e}"))?;
        println!("{json}");
    } else {
        if let Some(error) = &reply.error {
            eprintln!("(fallback: {error})");
        }
        println!("{}", reply.response);
    }

    Ok(())
}
