//! One invocation: load config, fetch, render, write.

use std::io::Write;

use tracing::debug;

use activity_events::ActivityEvent;
use activity_render::ActivityRenderer;

use crate::cli::Args;
use crate::client::GitHubClient;
use crate::config::AppConfig;
use crate::error::Result;

/// Runs the tool for the parsed arguments.
///
/// `open_output` is called only after the events have been fetched.
pub async fn run<W, F>(args: &Args, open_output: F) -> Result<()>
where
    W: Write,
    F: FnOnce() -> W,
{
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply_to(&mut config);
    debug!(?config, "Resolved configuration");

    let client = GitHubClient::new(&config.api)?;
    let events = client.fetch_events(&args.username).await?;

    let renderer = ActivityRenderer::new(config.render);
    let mut out = open_output();
    emit(&renderer, &events, &args.username, &mut out)
}

/// Renders `events` and writes one line per write, in order.
pub fn emit<W: Write>(
    renderer: &ActivityRenderer,
    events: &[ActivityEvent],
    username: &str,
    out: &mut W,
) -> Result<()> {
    let shown = renderer.shown_count(events.len());
    if shown < events.len() {
        debug!(shown, dropped = events.len() - shown, "Truncating activity list");
    }

    for line in renderer.render(events, username) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
