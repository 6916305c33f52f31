//! Scripted event replay.
//!
//! A script is a JSON-lines file: one [`Command`] per line, in the order the
//! host received them. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"event":"pointer_down","device":"pen","x":10,"y":10}
//! {"event":"pointer_move","device":"pen","x":80,"y":40}
//! {"event":"pointer_up","device":"pen"}
//! {"action":"save"}
//! ```

use crate::input::{Command, InputState};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// What a replay run did.
#[derive(Debug, Default)]
pub struct ReplaySummary {
    /// Number of commands dispatched
    pub commands: usize,
    /// Pictures written by save actions, in order
    pub saved: Vec<PathBuf>,
}

/// Parses script text into commands.
///
/// # Errors
/// Fails on the first malformed line, naming its 1-based line number.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid command on line {}: {}", index + 1, line.trim()))
        })
        .collect()
}

/// Dispatches `commands` in order, writing the picture whenever a save is requested.
pub fn run<I>(state: &mut InputState, commands: I) -> Result<ReplaySummary>
where
    I: IntoIterator<Item = Command>,
{
    let mut summary = ReplaySummary::default();

    for command in commands {
        debug!("Dispatching {:?}", command);
        state
            .dispatch(command)
            .with_context(|| format!("Command {} failed", summary.commands + 1))?;
        summary.commands += 1;

        if state.take_pending_save() {
            let path = state.save_picture().context("Failed to save picture")?;
            summary.saved.push(path);
        }
    }

    info!(
        "Replayed {} commands ({} undo steps, {} redo steps)",
        summary.commands,
        state.history().undo_len(),
        state.history().redo_len()
    );
    Ok(summary)
}

/// Reads, parses and replays the script at `path`.
pub fn run_file(state: &mut InputState, path: &Path) -> Result<ReplaySummary> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let commands =
        parse_script(&text).with_context(|| format!("Failed to parse {}", path.display()))?;
    run(state, commands)
}
