use anyhow::Context;
use clap::Parser;
use inkpad::{Config, InputState, replay};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inkpad")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INKPAD_GIT_HASH"), ")"),
    about = "Freehand raster drawing surface with undo/redo and PNG export"
)]
struct Cli {
    /// Replay a JSON-lines script of input events and actions
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Use this config file instead of ~/.config/inkpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory exported pictures are written to
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Save the picture after the script finishes
    #[arg(long, short = 'e', requires = "script")]
    export: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script) = cli.script else {
        println!("inkpad: Freehand raster drawing surface");
        println!();
        println!("Usage:");
        println!("  inkpad --script events.jsonl            Replay recorded input");
        println!("  inkpad --script events.jsonl --export   Replay and save picture.png");
        println!("  inkpad --help                           Show help");
        println!();
        println!("Script lines (one JSON object each):");
        println!(r#"  {{"event":"pointer_down","device":"pen","x":10,"y":10}}"#);
        println!(r#"  {{"event":"pointer_move","device":"pen","x":80,"y":40}}"#);
        println!(r#"  {{"event":"pointer_up","device":"pen"}}"#);
        println!(r#"  {{"action":"undo"}}"#);
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(output) = cli.output {
        config.export.directory = output;
    }

    let mut state = InputState::from_config(&config).context("Failed to create drawing surface")?;
    let mut summary = replay::run_file(&mut state, &script)?;

    if cli.export {
        let path = state.save_picture().context("Failed to save picture")?;
        summary.saved.push(path);
    }

    for path in &summary.saved {
        println!("Saved {}", path.display());
    }

    Ok(())
}
