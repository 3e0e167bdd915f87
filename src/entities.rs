//! All game entity types. Pure data, no logic beyond small accessors.

use crate::difficulty::Difficulty;

// ── Playfield geometry ────────────────────────────────────────────────────────

pub const PLAYFIELD_WIDTH: f32 = 800.0;
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
/// Horizontal distance covered per tick while a direction is held.
pub const PLAYER_SPEED: f32 = 8.0;

pub const BALLOON_SIZE: f32 = 40.0;
pub const PROJECTILE_SIZE: f32 = 5.0;
/// Upward distance a projectile covers per tick.
pub const PROJECTILE_SPEED: f32 = 10.0;

pub const FIRST_LEVEL_THRESHOLD: u32 = 100;
pub const LEVEL_MULTIPLIER: f64 = 1.5;

pub const NORMAL_POINTS: u32 = 10;
pub const SPECIAL_POINTS: u32 = 30;

// ── Balloons ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalloonColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    /// Reserved for special balloons.
    Gold,
}

/// Colors a normal balloon may be given.
pub const NORMAL_PALETTE: [BalloonColor; 5] = [
    BalloonColor::Red,
    BalloonColor::Blue,
    BalloonColor::Green,
    BalloonColor::Yellow,
    BalloonColor::Purple,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalloonKind {
    Normal { color: BalloonColor },
    /// High-value balloon: always gold, drawn with a marker.
    Special,
}

impl BalloonKind {
    pub fn color(&self) -> BalloonColor {
        match self {
            BalloonKind::Normal { color } => *color,
            BalloonKind::Special => BalloonColor::Gold,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            BalloonKind::Normal { .. } => NORMAL_POINTS,
            BalloonKind::Special => SPECIAL_POINTS,
        }
    }

    pub fn is_marked(&self) -> bool {
        matches!(self, BalloonKind::Special)
    }
}

/// A falling balloon.  `(x, y)` is the top-left corner of its box.
#[derive(Clone, Debug, PartialEq)]
pub struct Balloon {
    pub x: f32,
    pub y: f32,
    /// Downward distance per tick.
    pub speed: f32,
    pub kind: BalloonKind,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A projectile fired by the cannon.  `(x, y)` is the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

impl Player {
    pub fn center_x(&self) -> f32 {
        self.x + PLAYER_WIDTH / 2.0
    }
}

// ── Per-tick input ────────────────────────────────────────────────────────────

/// One tick's worth of input.  `quit`, `fire` and `pause` are
/// edge-triggered; `move_left` / `move_right` are held levels and may both
/// be set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    /// Set when the session should end; the main loop stops before ticking.
    pub quit: bool,
    /// Fire presses this tick, one projectile each.
    pub fire: u32,
    pub move_left: bool,
    pub move_right: bool,
    pub pause: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state, owned by the main loop and handed to `tick` by
/// exclusive reference.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub balloons: Vec<Balloon>,
    pub score: u32,
    /// Best score seen so far (loaded at start, raised live during play).
    pub high_score: u32,
    pub level: u32,
    /// Score at which the next level begins.
    pub next_level_at: u32,
    /// Difficulty parameters for the current level.
    pub difficulty: Difficulty,
    /// Ticks since the last balloon spawn.
    pub spawn_timer: u32,
    /// Remaining ticks of the level-up banner.
    pub level_up_ticks: u32,
    pub paused: bool,
    pub width: f32,
    pub height: f32,
}

impl GameState {
    /// Read-only view handed to the renderer.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            player_x: self.player.x,
            player_y: self.player.y,
            projectiles: self.projectiles.iter().map(|p| (p.x, p.y)).collect(),
            balloons: self
                .balloons
                .iter()
                .map(|b| BalloonView {
                    x: b.x,
                    y: b.y,
                    color: b.kind.color(),
                    kind: b.kind,
                })
                .collect(),
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            next_level_at: self.next_level_at,
            level_up_banner: self.level_up_ticks > 0,
            paused: self.paused,
            width: self.width,
            height: self.height,
        }
    }
}

// ── Rendering surface ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct BalloonView {
    pub x: f32,
    pub y: f32,
    pub color: BalloonColor,
    pub kind: BalloonKind,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub player_x: f32,
    pub player_y: f32,
    pub projectiles: Vec<(f32, f32)>,
    pub balloons: Vec<BalloonView>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub next_level_at: u32,
    pub level_up_banner: bool,
    pub paused: bool,
    pub width: f32,
    pub height: f32,
}
