use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use balloon_shooter::compute::{init_state, resolve_collisions, tick};
use balloon_shooter::difficulty::difficulty;
use balloon_shooter::entities::*;
use balloon_shooter::persistence::HighScoreStore;

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (0u32..3, any::<bool>(), any::<bool>()).prop_map(|(fire, move_left, move_right)| {
        TickInput {
            quit: false,
            fire,
            move_left,
            move_right,
            pause: false,
        }
    })
}

proptest! {
    #[test]
    fn spawn_interval_floored_and_non_increasing(level in 1u32..500) {
        let here = difficulty(level);
        let next = difficulty(level + 1);
        prop_assert!(here.spawn_interval >= 10);
        prop_assert!(next.spawn_interval <= here.spawn_interval);
    }

    #[test]
    fn special_chance_bounded_and_non_decreasing(level in 1u32..500) {
        let here = difficulty(level);
        let next = difficulty(level + 1);
        prop_assert!(here.special_chance >= 0.2 && here.special_chance <= 0.5);
        prop_assert!(next.special_chance >= here.special_chance);
    }

    #[test]
    fn ticks_never_lower_score_or_leave_bounds(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut state = init_state(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, 0);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut last_score = 0;
        let mut last_level = 1;
        for input in &inputs {
            tick(&mut state, input, &mut rng);
            prop_assert!(state.score >= last_score);
            prop_assert!(state.level >= last_level);
            prop_assert!(state.high_score >= state.score);
            prop_assert!(state.player.x >= 0.0);
            prop_assert!(state.player.x <= PLAYFIELD_WIDTH - PLAYER_WIDTH);
            prop_assert!(state.projectiles.iter().all(|p| p.y >= 0.0));
            prop_assert!(state.balloons.iter().all(|b| b.y <= PLAYFIELD_HEIGHT));
            last_score = state.score;
            last_level = state.level;
        }
    }

    #[test]
    fn overlapping_pair_is_always_consumed(
        bx in 0.0f32..760.0,
        by in 0.0f32..560.0,
        dx in -4.0f32..39.0,
        dy in -4.0f32..39.0,
        is_special in any::<bool>(),
    ) {
        let kind = if is_special {
            BalloonKind::Special
        } else {
            BalloonKind::Normal { color: BalloonColor::Green }
        };
        let mut state = init_state(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, 0);
        state.balloons.push(Balloon { x: bx, y: by, speed: 1.0, kind });
        state.projectiles.push(Projectile { x: bx + dx, y: by + dy });

        let gain = resolve_collisions(&mut state);
        prop_assert!(state.balloons.is_empty());
        prop_assert!(state.projectiles.is_empty());
        prop_assert_eq!(gain, kind.points());
        prop_assert_eq!(state.score, kind.points());
    }

    #[test]
    fn save_then_load_is_max(previous in 0u32..100_000, candidate in 0u32..100_000) {
        let path = std::env::temp_dir().join(format!(
            "balloon_shooter_prop_{}.json",
            std::process::id()
        ));
        let store = HighScoreStore::new(&path);
        let _ = std::fs::remove_file(&path);
        store.save(previous);
        let stored = store.save(candidate);
        prop_assert_eq!(stored, previous.max(candidate));
        prop_assert_eq!(store.load(), previous.max(candidate));
        let _ = std::fs::remove_file(&path);
    }
}
