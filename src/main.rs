mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal,
    ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use balloon_shooter::compute::{init_state, tick};
use balloon_shooter::entities::{GameState, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use balloon_shooter::input::{install_shutdown_flag, poll_title, KeyTracker, TitleEvent};
use balloon_shooter::{Config, HighScoreStore};

/// How often the title screen re-checks the shutdown flag.
const TITLE_POLL: Duration = Duration::from_millis(50);

// ── Title screen ──────────────────────────────────────────────────────────────

/// Returns `true` → start playing,  `false` → quit.
fn title_screen<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    shutdown: &AtomicBool,
    high_score: u32,
) -> std::io::Result<bool> {
    display::render_title(out, high_score)?;

    loop {
        match poll_title(rx, shutdown, TITLE_POLL) {
            TitleEvent::Start => return Ok(true),
            TitleEvent::Quit => return Ok(false),
            TitleEvent::Redraw => display::render_title(out, high_score)?,
            TitleEvent::Idle => {}
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits, a termination signal arrives, or the input
/// thread dies.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    shutdown: &AtomicBool,
    rng: &mut StdRng,
    frame_budget: Duration,
) -> std::io::Result<()> {
    let mut keys = KeyTracker::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let input = keys.drain(rx, frame, shutdown);
        if input.quit {
            return Ok(());
        }

        tick(state, &input, rng);

        display::render(out, &state.snapshot())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = Config::parse();
    let shutdown = install_shutdown_flag();

    let store = HighScoreStore::new(config.score_path());
    let high_score = store.load();

    let mut rng = match config.seed {
        Some(seed) => {
            log::info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut state = init_state(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, high_score);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = match title_screen(&mut out, &rx, &shutdown, high_score) {
        Ok(true) => game_loop(
            &mut out,
            &mut state,
            &rx,
            &shutdown,
            &mut rng,
            config.frame_budget(),
        ),
        Ok(false) => Ok(()),
        Err(e) => Err(e),
    };

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    // Persist even when the loop failed, so the session's best is kept.
    let best = store.save(state.score);
    if let Err(e) = &result {
        log::error!("game loop failed: {}", e);
    }
    // The terminal may already be gone (SIGHUP), so a failed print is ignored.
    let _ = writeln!(stdout(), "Score: {}   High score: {}", state.score, best);

    result
}
