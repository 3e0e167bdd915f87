use balloon_shooter::compute::init_state;
use balloon_shooter::entities::*;

#[test]
fn balloon_kind_points_and_colors() {
    let red = BalloonKind::Normal { color: BalloonColor::Red };
    assert_eq!(red.points(), 10);
    assert_eq!(red.color(), BalloonColor::Red);
    assert!(!red.is_marked());

    assert_eq!(BalloonKind::Special.points(), 30);
    assert_eq!(BalloonKind::Special.color(), BalloonColor::Gold);
    assert!(BalloonKind::Special.is_marked());
}

#[test]
fn palette_excludes_gold() {
    assert_eq!(NORMAL_PALETTE.len(), 5);
    assert!(!NORMAL_PALETTE.contains(&BalloonColor::Gold));
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, 0);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.balloons.push(Balloon {
        x: 5.0,
        y: 5.0,
        speed: 1.0,
        kind: BalloonKind::Special,
    });

    assert_eq!(original.player.x, 375.0);
    assert_eq!(original.score, 0);
    assert!(original.balloons.is_empty());
}

#[test]
fn snapshot_mirrors_state_in_order() {
    let mut s = init_state(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, 70);
    s.score = 40;
    s.projectiles.push(Projectile { x: 1.0, y: 2.0 });
    s.projectiles.push(Projectile { x: 3.0, y: 4.0 });
    s.balloons.push(Balloon {
        x: 10.0,
        y: 20.0,
        speed: 2.0,
        kind: BalloonKind::Normal { color: BalloonColor::Purple },
    });
    s.balloons.push(Balloon {
        x: 30.0,
        y: 40.0,
        speed: 2.0,
        kind: BalloonKind::Special,
    });

    let snap = s.snapshot();
    assert_eq!(snap.player_x, 375.0);
    assert_eq!(snap.player_y, 560.0);
    assert_eq!(snap.projectiles, vec![(1.0, 2.0), (3.0, 4.0)]);
    assert_eq!(snap.balloons.len(), 2);
    assert_eq!(snap.balloons[0].color, BalloonColor::Purple);
    assert_eq!(snap.balloons[1].color, BalloonColor::Gold);
    assert_eq!(snap.balloons[1].kind, BalloonKind::Special);
    assert_eq!((snap.score, snap.high_score), (40, 70));
    assert_eq!((snap.level, snap.next_level_at), (1, 100));
    assert!(!snap.level_up_banner);
    assert!(!snap.paused);
}
