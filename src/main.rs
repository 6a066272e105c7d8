//! Escape the Qubits terminal runner.
//!
//! Fixed-step loop: poll input until the next tick, apply intents, advance
//! the simulation, render. The clock is sampled once per iteration.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;

use escape_qubits::core::{GameSnapshot, GameState};
use escape_qubits::input::InputController;
use escape_qubits::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use escape_qubits::types::{Intent, TICK_MS};

const LOG_FILE: &str = "escape-qubits.log";

fn main() -> Result<()> {
    init_logging()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file in the temp dir, and only when `RUST_LOG` asks for it:
/// anything on stderr would tear the alternate screen.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(std::env::temp_dir().join(LOG_FILE))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let origin = Instant::now();
    let clock = || origin.elapsed().as_secs_f64();

    let seed: u64 = rand::random();
    let mut game = GameState::new(seed, clock());
    info!("starting game with seed {}", seed);

    let view = GameView::default();
    let input = InputController::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        let mut intent = None;
        if event::poll(timeout)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
            }
            intent = input.translate(&ev);
        }

        let now = clock();
        match intent {
            Some(Intent::Quit) => {
                info!("quit requested");
                return Ok(());
            }
            Some(intent) => {
                game.apply_intent(intent, now);
            }
            None => {}
        }

        if last_tick.elapsed() < tick {
            continue;
        }
        last_tick = Instant::now();

        game.advance(now);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap, now);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
    }
}
