//! Game-logic functions.
//!
//! The simulation step takes the current `GameState` by exclusive reference
//! and advances it one tick in place.  Side effects are limited to the
//! injected RNG, so a seeded RNG makes every run reproducible.

use rand::Rng;

use crate::difficulty::difficulty;
use crate::entities::{
    Balloon, BalloonKind, GameState, Player, Projectile, TickInput, BALLOON_SIZE,
    FIRST_LEVEL_THRESHOLD, LEVEL_MULTIPLIER, NORMAL_PALETTE, PLAYER_HEIGHT, PLAYER_SPEED,
    PLAYER_WIDTH, PROJECTILE_SIZE, PROJECTILE_SPEED,
};

/// How long the "LEVEL n" banner stays up after a level-up (1 s at 60 FPS).
pub const LEVEL_BANNER_TICKS: u32 = 60;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the level-1 state for a playfield of the given size.
pub fn init_state(width: f32, height: f32, high_score: u32) -> GameState {
    GameState {
        player: Player {
            x: width / 2.0 - PLAYER_WIDTH / 2.0,
            y: height - PLAYER_HEIGHT - 10.0,
        },
        projectiles: Vec::new(),
        balloons: Vec::new(),
        score: 0,
        high_score,
        level: 1,
        next_level_at: FIRST_LEVEL_THRESHOLD,
        difficulty: difficulty(1),
        spawn_timer: 0,
        level_up_ticks: 0,
        paused: false,
        width,
        height,
    }
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Fire a projectile centred on the cannon, starting at the cannon's row.
pub fn player_shoot(state: &mut GameState) {
    state.projectiles.push(Projectile {
        x: state.player.center_x() - PROJECTILE_SIZE / 2.0,
        y: state.player.y,
    });
}

/// Apply both held directions; the net move is clamped to the playfield.
pub fn move_player(state: &mut GameState, left: bool, right: bool) {
    let mut dx = 0.0;
    if left {
        dx -= PLAYER_SPEED;
    }
    if right {
        dx += PLAYER_SPEED;
    }
    let max_x = (state.width - PLAYER_WIDTH).max(0.0);
    state.player.x = (state.player.x + dx).clamp(0.0, max_x);
}

// ── Per-tick stages ──────────────────────────────────────────────────────────

/// Move projectiles up and drop those that crossed the top edge.
pub fn advance_projectiles(state: &mut GameState) {
    for p in &mut state.projectiles {
        p.y -= PROJECTILE_SPEED;
    }
    state.projectiles.retain(|p| p.y >= 0.0);
}

/// Raise the level once if the score has reached the threshold.
/// Returns `true` when a level-up happened.
pub fn check_level_up(state: &mut GameState) -> bool {
    if state.score < state.next_level_at {
        return false;
    }
    state.level += 1;
    state.next_level_at = (state.next_level_at as f64 * LEVEL_MULTIPLIER).round() as u32;
    state.difficulty = difficulty(state.level);
    state.level_up_ticks = LEVEL_BANNER_TICKS;
    log::info!(
        "level {} reached at score {} (next at {})",
        state.level,
        state.score,
        state.next_level_at
    );
    true
}

/// Roll a new balloon at the top edge using the current difficulty.
pub fn spawn_balloon(state: &GameState, rng: &mut impl Rng) -> Balloon {
    let d = &state.difficulty;
    let max_x = (state.width - BALLOON_SIZE).max(0.0);
    let x = rng.gen_range(0.0..=max_x);
    let speed = rng.gen_range(d.speed_min..=d.speed_max);
    let kind = if rng.gen_bool(d.special_chance) {
        BalloonKind::Special
    } else {
        let color = NORMAL_PALETTE[rng.gen_range(0..NORMAL_PALETTE.len())];
        BalloonKind::Normal { color }
    };
    Balloon { x, y: 0.0, speed, kind }
}

/// Count one tick towards the next spawn and emit a balloon when due.
/// Returns `true` when a balloon was added.
pub fn advance_spawner(state: &mut GameState, rng: &mut impl Rng) -> bool {
    state.spawn_timer += 1;
    if state.spawn_timer < state.difficulty.spawn_interval {
        return false;
    }
    state.spawn_timer = 0;
    let balloon = spawn_balloon(state, rng);
    log::debug!(
        "spawned {:?} balloon at x={:.1} speed={:.2}",
        balloon.kind,
        balloon.x,
        balloon.speed
    );
    state.balloons.push(balloon);
    true
}

/// Move balloons down and drop those below the bottom edge.  Missed
/// balloons cost nothing.
pub fn advance_balloons(state: &mut GameState) {
    for b in &mut state.balloons {
        b.y += b.speed;
    }
    let height = state.height;
    state.balloons.retain(|b| b.y <= height);
}

/// Axis-aligned overlap between a projectile box and a balloon box.
/// Touching edges do not count.
pub fn overlaps(p: &Projectile, b: &Balloon) -> bool {
    p.x < b.x + BALLOON_SIZE
        && p.x + PROJECTILE_SIZE > b.x
        && p.y < b.y + BALLOON_SIZE
        && p.y + PROJECTILE_SIZE > b.y
}

/// Pop every balloon hit by a projectile.  Projectiles are scanned in order
/// and each takes the first live balloon it overlaps; both are then removed
/// in a single compaction pass.  Returns the points gained.
pub fn resolve_collisions(state: &mut GameState) -> u32 {
    let mut popped: Vec<usize> = Vec::new();
    let mut spent: Vec<usize> = Vec::new();

    for (pi, projectile) in state.projectiles.iter().enumerate() {
        for (bi, balloon) in state.balloons.iter().enumerate() {
            if !popped.contains(&bi) && overlaps(projectile, balloon) {
                popped.push(bi);
                spent.push(pi);
                break;
            }
        }
    }

    if popped.is_empty() {
        return 0;
    }

    let gain: u32 = popped
        .iter()
        .map(|&i| state.balloons[i].kind.points())
        .sum();

    state.balloons = std::mem::take(&mut state.balloons)
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !popped.contains(i))
        .map(|(_, b)| b)
        .collect();
    state.projectiles = std::mem::take(&mut state.projectiles)
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !spent.contains(i))
        .map(|(_, p)| p)
        .collect();

    state.score = state.score.saturating_add(gain);
    if state.score > state.high_score {
        state.high_score = state.score;
    }
    gain
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
/// `input.quit` is not looked at here; the main loop stops before calling.
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl Rng) {
    if input.pause {
        state.paused = !state.paused;
    }
    if state.paused {
        return;
    }

    state.level_up_ticks = state.level_up_ticks.saturating_sub(1);

    // ── 1. Fire ──────────────────────────────────────────────────────────────
    for _ in 0..input.fire {
        player_shoot(state);
    }

    // ── 2. Move the cannon ───────────────────────────────────────────────────
    move_player(state, input.move_left, input.move_right);

    // ── 3. Projectiles ───────────────────────────────────────────────────────
    advance_projectiles(state);

    // ── 4. Level-up ──────────────────────────────────────────────────────────
    check_level_up(state);

    // ── 5. Spawn ─────────────────────────────────────────────────────────────
    advance_spawner(state, rng);

    // ── 6. Balloons ──────────────────────────────────────────────────────────
    advance_balloons(state);

    // ── 7. Collisions ────────────────────────────────────────────────────────
    resolve_collisions(state);
}
