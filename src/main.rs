//! Terminal runner (default binary).
//!
//! Wires the two event sources into the engine: a frame driver that forwards
//! elapsed time to `Engine::on_tick`, and crossterm key presses forwarded as
//! commands. Both are handled on this one thread, so every engine call runs
//! to completion before the next event is looked at.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blocks::engine::{Engine, EngineConfig, GameSnapshot};
use tui_blocks::input::{handle_key_event, is_restart, should_quit};
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blocks::types::{GRAVITY_INTERVAL_MS, LINE_CLEAR_BONUS, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "tui-blocks", about = "Falling-block puzzle in the terminal")]
struct Args {
    /// Seed for the shape randomizer (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Milliseconds between gravity steps
    #[arg(long, default_value_t = GRAVITY_INTERVAL_MS)]
    gravity_ms: u32,

    /// Points per cleared row
    #[arg(long, default_value_t = LINE_CLEAR_BONUS)]
    line_bonus: u32,

    /// Terminal columns per grid cell
    #[arg(long, default_value_t = 2)]
    cell_width: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let config = EngineConfig::default()
        .with_gravity_interval_ms(args.gravity_ms)
        .with_line_clear_bonus(args.line_bonus);
    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut engine = Engine::with_config(config, seed);

    let view = GameView::new(args.cell_width, 1);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        engine.restart();
                        last_tick = Instant::now();
                    } else if let Some(command) = handle_key_event(key) {
                        engine.submit(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            let elapsed = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
            last_tick = Instant::now();
            // The tick source stops once the game is over.
            if !engine.is_game_over() {
                engine.on_tick(elapsed);
            }
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
