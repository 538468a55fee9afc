//! Terminal runner (default binary).
//!
//! Polls crossterm for keys with the frame cadence as timeout, feeds actions to
//! the engine, ticks it with a monotonic clock and redraws.
//!
//! Logs go to `BLOCKS_LOG_PATH` (default `blocks.log`) since the terminal is in
//! raw mode on the alternate screen.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{error, info};

use blocks::core::{Engine, EngineConfig, GameSnapshot};
use blocks::input::{action_for_key, should_quit};
use blocks::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};

const DEFAULT_LOG_PATH: &str = "blocks.log";

fn init_logging() -> Result<()> {
    let path = std::env::var("BLOCKS_LOG_PATH").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_module_path(false)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// `BLOCKS_SEED` when given, otherwise derived from the wall clock.
fn session_config() -> EngineConfig {
    let mut config = EngineConfig::from_env();
    if EngineConfig::seed_from_env().is_none() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1);
        config.seed = nanos;
    }
    config
}

fn main() -> Result<()> {
    init_logging()?;

    let config = session_config();
    let engine = Engine::new(config).context("invalid engine configuration")?;
    info!(
        "starting {}x{} board, seed {}",
        engine.board().width(),
        engine.board().height(),
        engine.seed()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, engine);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        error!("failed to restore terminal: {e:#}");
    }
    if let Err(e) = &result {
        error!("exiting with error: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut engine: Engine) -> Result<()> {
    let view = BoardView::default();
    let frame = Duration::from_millis(engine.config().frame_ms);
    let started = Instant::now();

    let mut snap = GameSnapshot::new(engine.board().width(), engine.board().height());
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit at score {}", engine.score());
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key, engine.status()) {
                        engine.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        engine.tick(started.elapsed().as_millis() as u64);
    }
}
