//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and a read-only frame snapshot.
//! No game logic is performed; this module only translates playfield
//! coordinates into terminal cells and queues the drawing commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use balloon_shooter::entities::{
    BalloonColor, BalloonView, FrameSnapshot, BALLOON_SIZE, PLAYER_WIDTH,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_PROJECTILE: Color = Color::White;
const C_STRING: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;
const C_BANNER: Color = Color::Yellow;
const C_GOLD: Color = Color::Rgb { r: 255, g: 215, b: 0 };

fn balloon_color(color: BalloonColor) -> Color {
    match color {
        BalloonColor::Red => Color::Red,
        BalloonColor::Blue => Color::Blue,
        BalloonColor::Green => Color::Green,
        BalloonColor::Yellow => Color::Yellow,
        BalloonColor::Purple => Color::Magenta,
        BalloonColor::Gold => C_GOLD,
    }
}

// ── Playfield → terminal mapping ──────────────────────────────────────────────

/// Maps playfield units onto the cells inside the border
/// (columns 1..w-1, rows 2..h-2).
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(snap: &FrameSnapshot, cols: u16, rows: u16) -> Self {
        let inner_w = cols.saturating_sub(2).max(1) as f32;
        let inner_h = rows.saturating_sub(4).max(1) as f32;
        Viewport {
            cols,
            rows,
            sx: inner_w / snap.width,
            sy: inner_h / snap.height,
        }
    }

    fn col(&self, x: f32) -> u16 {
        let c = 1 + (x * self.sx).max(0.0) as u16;
        c.min(self.cols.saturating_sub(2))
    }

    fn row(&self, y: f32) -> Option<u16> {
        if y < 0.0 {
            return None;
        }
        let r = 2 + (y * self.sy) as u16;
        (r < self.rows.saturating_sub(2)).then_some(r)
    }

    fn span(&self, w: f32) -> u16 {
        ((w * self.sx).round() as u16).max(1)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &FrameSnapshot) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(snap, cols, rows);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, snap, &view)?;

    for balloon in &snap.balloons {
        draw_balloon(out, balloon, &view)?;
    }
    for &(x, y) in &snap.projectiles {
        draw_projectile(out, x, y, &view)?;
    }

    draw_player(out, snap, &view)?;
    draw_controls_hint(out, &view)?;

    if snap.paused {
        draw_centered(out, &view, "║  PAUSED — P to resume  ║", C_BANNER)?;
    } else if snap.level_up_banner {
        draw_centered(out, &view, &format!("★  LEVEL {}  ★", snap.level), C_BANNER)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &FrameSnapshot, view: &Viewport) -> std::io::Result<()> {
    // Score and high score, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>6}  Hi:{:>6}",
        snap.score, snap.high_score
    )))?;

    // Level and next threshold, right
    let level_str = format!("Level {}  Next at {}", snap.level, snap.next_level_at);
    let lx = view
        .cols
        .saturating_sub(level_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(level_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, snap: &FrameSnapshot, view: &Viewport) -> std::io::Result<()> {
    // Cannon sprite:
    //    ║       ← barrel   (row y)
    //   ███      ← carriage (row y+1)
    let Some(row) = view.row(snap.player_y) else {
        return Ok(());
    };
    let left = view.col(snap.player_x);
    let width = view.span(PLAYER_WIDTH).max(3);
    let barrel = view.col(snap.player_x + PLAYER_WIDTH / 2.0);

    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(barrel, row))?;
    out.queue(Print("║"))?;

    let body_row = row + 1;
    if body_row < view.rows.saturating_sub(2) {
        let room = view.cols.saturating_sub(1).saturating_sub(left);
        let body = "█".repeat(width.min(room) as usize);
        out.queue(cursor::MoveTo(left, body_row))?;
        out.queue(Print(body))?;
    }
    Ok(())
}

fn draw_balloon<W: Write>(out: &mut W, balloon: &BalloonView, view: &Viewport) -> std::io::Result<()> {
    let Some(row) = view.row(balloon.y) else {
        return Ok(());
    };
    let col = view.col(balloon.x + BALLOON_SIZE / 2.0);

    // Special balloons carry a marker in the middle.
    let glyph = if balloon.kind.is_marked() { "◉" } else { "●" };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(balloon_color(balloon.color)))?;
    out.queue(Print(glyph))?;

    // String
    if let Some(string_row) = view.row(balloon.y + BALLOON_SIZE) {
        if string_row > row {
            out.queue(cursor::MoveTo(col, string_row))?;
            out.queue(style::SetForegroundColor(C_STRING))?;
            out.queue(Print("╎"))?;
        }
    }
    Ok(())
}

fn draw_projectile<W: Write>(out: &mut W, x: f32, y: f32, view: &Viewport) -> std::io::Result<()> {
    if let Some(row) = view.row(y) {
        out.queue(cursor::MoveTo(view.col(x), row))?;
        out.queue(style::SetForegroundColor(C_PROJECTILE))?;
        out.queue(Print("•"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(out: &mut W, view: &Viewport, msg: &str, color: Color) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, view.rows / 2))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(msg))?;
    Ok(())
}

/// Title screen shown before play starts.
pub fn render_title<W: Write>(out: &mut W, high_score: u32) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "●  BALLOON  SHOOTER  ●";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(5),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    // High score display
    if high_score > 0 {
        let hs_str = format!("Best Score: {}", high_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            cy.saturating_sub(4),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&hs_str))?;
    }

    let legend: &[(&str, Color, &str)] = &[
        ("●", Color::Red, " Balloon        — 10 points"),
        ("◉", C_GOLD, " Gold balloon   — 30 points"),
    ];
    for (i, (sym, color, desc)) in legend.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(14), row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(sym))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(*desc))?;
    }

    let prompt = "SPACE : Start   Q : Quit";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(prompt.chars().count() as u16 / 2),
        cy + 3,
    ))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(prompt))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
