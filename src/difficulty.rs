//! Level-dependent difficulty parameters.

/// Spawn and speed parameters for one level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Difficulty {
    /// Slowest balloon fall speed (units per tick).
    pub speed_min: f32,
    /// Fastest balloon fall speed (units per tick).
    pub speed_max: f32,
    /// Ticks between balloon spawns.
    pub spawn_interval: u32,
    /// Probability that a new balloon is special.
    pub special_chance: f64,
}

pub const MIN_SPAWN_INTERVAL: u32 = 10;
pub const MAX_SPECIAL_CHANCE: f64 = 0.5;

/// Difficulty for `level`.  Levels start at 1; a 0 is treated as 1.
pub fn difficulty(level: u32) -> Difficulty {
    let level = level.max(1);
    let l = level as f32;
    Difficulty {
        speed_min: 1.0 + 0.2 * l,
        speed_max: 3.0 + 0.3 * l,
        spawn_interval: 60u32
            .saturating_sub(level.saturating_mul(5))
            .max(MIN_SPAWN_INTERVAL),
        special_chance: (0.2 + 0.05 * level as f64).min(MAX_SPECIAL_CHANCE),
    }
}
