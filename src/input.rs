//! Keyboard sampling: turns raw terminal events into one `TickInput` per
//! frame, and watches for termination signals.
//!
//! Input model: a `key_frame` map records the frame number of the last
//! press/repeat event for every key, and each frame the direction keys that
//! are still "fresh" are applied together, so SPACE can be tapped while a
//! direction is held.  Fire and pause act on press events only.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
//!   `Press` / `Repeat` / `Release` events → keys are removed on release,
//!   and a held SPACE fires once.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`, so a held SPACE auto-fires at the repeat rate).
//!   Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::TickInput;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  The OS key-repeat rate is ≥ 15 Hz, so a window of 8
/// frames (≈133 ms at 60 FPS) is always refreshed before expiry.
pub const HOLD_WINDOW: u64 = 8;

/// Q, Esc, or Ctrl-C (which arrives as a key event in raw mode).
pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Termination signals ───────────────────────────────────────────────────────

/// Flag raised by SIGHUP (terminal closed), SIGTERM and SIGINT.  The loops
/// poll it and leave through the normal save-and-restore path.
pub fn install_shutdown_flag() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    {
        use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
        for sig in [SIGHUP, SIGTERM, SIGINT] {
            if let Err(e) = signal_hook::flag::register(sig, Arc::clone(&flag)) {
                log::warn!("cannot watch signal {}: {}", sig, e);
            }
        }
    }
    flag
}

// ── Title screen ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleEvent {
    Start,
    Quit,
    /// Terminal was resized; draw the screen again.
    Redraw,
    /// Nothing relevant happened within the wait.
    Idle,
}

/// Wait up to `wait` for the next title-screen decision.
pub fn poll_title(rx: &Receiver<Event>, shutdown: &AtomicBool, wait: Duration) -> TitleEvent {
    if shutdown.load(Ordering::Relaxed) {
        return TitleEvent::Quit;
    }
    match rx.recv_timeout(wait) {
        Ok(Event::Key(KeyEvent { code, modifiers, kind: KeyEventKind::Press, .. })) => {
            if is_quit(code, modifiers) {
                TitleEvent::Quit
            } else if code == KeyCode::Char(' ') || code == KeyCode::Enter {
                TitleEvent::Start
            } else {
                TitleEvent::Idle
            }
        }
        Ok(Event::Resize(..)) => TitleEvent::Redraw,
        Ok(_) | Err(RecvTimeoutError::Timeout) => TitleEvent::Idle,
        // Input thread is gone; nothing more can arrive.
        Err(RecvTimeoutError::Disconnected) => TitleEvent::Quit,
    }
}

// ── In-game sampling ──────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Maps each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Drain every pending event (non-blocking) into this frame's input.
    /// `quit` is set by a quit key, a raised shutdown flag, or a dead
    /// input thread.
    pub fn drain(&mut self, rx: &Receiver<Event>, frame: u64, shutdown: &AtomicBool) -> TickInput {
        let mut input = TickInput::default();
        if shutdown.load(Ordering::Relaxed) {
            log::info!("termination signal received");
            input.quit = true;
            return input;
        }

        loop {
            let ev = match rx.try_recv() {
                Ok(ev) => ev,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("input reader stopped; quitting");
                    input.quit = true;
                    return input;
                }
            };
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                // Press: record key + handle one-shot actions
                KeyEventKind::Press => {
                    self.key_frame.insert(code, frame);
                    if is_quit(code, modifiers) {
                        input.quit = true;
                        return input;
                    }
                    match code {
                        KeyCode::Char(' ') => input.fire += 1,
                        KeyCode::Char('p') | KeyCode::Char('P') => input.pause = true,
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    self.key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                }
            }
        }

        input.move_left = self.is_held(KeyCode::Left, frame)
            || self.is_held(KeyCode::Char('a'), frame)
            || self.is_held(KeyCode::Char('A'), frame);
        input.move_right = self.is_held(KeyCode::Right, frame)
            || self.is_held(KeyCode::Char('d'), frame)
            || self.is_held(KeyCode::Char('D'), frame);
        input
    }
}
