//! Lipid-Kurven-Editor: Headless-Replay.
//!
//! Spielt ein Skript von Pointer-Ereignissen gegen eine Kurve ab, gibt den
//! End-Snapshot als JSON aus und exportiert optional die letzte Szene als SVG.

use anyhow::Context;
use clap::Parser;
use lipid_curve_editor::io;
use lipid_curve_editor::{CurveShape, EditorController, EditorOptions, EditorState};
use std::path::PathBuf;

/// Kommandozeilen-Argumente des Replay-Werkzeugs.
#[derive(Parser, Debug)]
#[command(version, about = "Pointer-Replay für den Lipid-Kurven-Editor")]
struct Cli {
    /// Start-Kurve als Snapshot-JSON (sonst Standard-Bogen)
    #[arg(long)]
    shape: Option<PathBuf>,

    /// Replay-Skript mit Pointer-Ereignissen (down/move/up/frame)
    #[arg(long)]
    events: Option<PathBuf>,

    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exportiert die zuletzt gezeichnete Szene als SVG
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    log::info!("Lipid-Kurven-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = match &cli.shape {
        Some(path) => {
            let snapshot = io::load_snapshot(path)?;
            let shape = CurveShape::from_snapshot(
                snapshot,
                &options.default_arc,
                options.tension,
                options.arc_samples_per_segment,
            );
            EditorState::with_shape(shape, options)
        }
        None => EditorState::new(options),
    };
    let mut controller = EditorController::new();

    let events = match &cli.events {
        Some(path) => io::load_replay_script(path)?,
        None => Vec::new(),
    };

    let mut last_scene = None;
    let mut frames = 0usize;
    for (i, event) in events.into_iter().enumerate() {
        match event.to_intent() {
            Some(intent) => controller
                .handle_intent(&mut state, intent)
                .with_context(|| format!("Replay-Ereignis {i} fehlgeschlagen"))?,
            None => {
                if let Some(frame) = state.redraw.pending() {
                    last_scene = controller.handle_frame(&mut state, frame);
                    frames += 1;
                }
            }
        }
    }

    log::info!(
        "Replay abgeschlossen: {} Commands, {} Frames gezeichnet, {} Anforderungen zusammengefasst",
        state.command_log.len(),
        frames,
        state.redraw.coalesced_requests()
    );

    if let Some(path) = &cli.svg {
        // Ausstehende Änderungen in die exportierte Szene übernehmen
        let scene = match state.redraw.pending() {
            Some(frame) => controller.handle_frame(&mut state, frame),
            None => last_scene,
        };
        let scene = scene.unwrap_or_else(|| controller.build_render_scene(&state));
        io::save_svg(&scene, path)?;
    }

    println!("{}", io::write_snapshot(&state.shape.export_snapshot())?);
    Ok(())
}
