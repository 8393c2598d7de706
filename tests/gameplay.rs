use brick_orbit::consts::*;
use brick_orbit::sim::{GameEvent, GamePhase, KeyPhase};
use brick_orbit::{MotionMode, Session, Settings};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn press(session: &mut Session, code: &str) {
    session.key_event(code, KeyPhase::Down);
}

fn release(session: &mut Session, code: &str) {
    session.key_event(code, KeyPhase::Up);
}

#[test]
fn test_launch_once_then_ignored() {
    let mut session = Session::default();
    assert_eq!(session.state().phase, GamePhase::Serving);

    press(&mut session, "Space");
    let expected = Vec2::new(1.0, -1.0).normalize() * BALL_SPEED;
    assert!((session.state().ball_vel - expected).length() < 1e-6);

    session.frame(DT);
    let vel = session.state().ball_vel;
    release(&mut session, "Space");
    press(&mut session, "Space");
    assert_eq!(session.state().ball_vel, vel);
}

#[test]
fn test_paddle_walks_to_left_wall_and_stops() {
    let mut session = Session::default();
    press(&mut session, "ArrowLeft");

    let mut last_x = session.state().paddle.position.x;
    let mut stalled = false;
    for _ in 0..200 {
        session.frame(DT);
        let x = session.state().paddle.position.x;
        if x == last_x {
            stalled = true;
            break;
        }
        last_x = x;
    }
    assert!(stalled);
    let paddle_min = last_x - PADDLE_EXTENTS.x;
    assert!(paddle_min <= -ARENA_HALF_WIDTH);
    assert!(paddle_min > -ARENA_HALF_WIDTH - PADDLE_SPEED - 1e-4);

    // Held key stays blocked
    session.frame(DT);
    assert_eq!(session.state().paddle.position.x, last_x);

    release(&mut session, "ArrowLeft");
    press(&mut session, "ArrowRight");
    session.frame(DT);
    assert!((session.state().paddle.position.x - (last_x + PADDLE_SPEED)).abs() < 1e-4);
}

#[test]
fn test_unattended_ball_drains_ammo_then_resets() {
    let mut session = Session::default();
    let mut lives_lost = 0;
    let mut resets = 0;

    // Paddle parked at the far left, so every serve is missed
    press(&mut session, "ArrowLeft");
    for _ in 0..40 {
        session.frame(DT);
    }
    release(&mut session, "ArrowLeft");

    for _ in 0..5_000 {
        if session.state().phase == GamePhase::Serving {
            press(&mut session, "ArrowLeft");
            for _ in 0..40 {
                session.frame(DT);
            }
            release(&mut session, "ArrowLeft");
            press(&mut session, "Space");
            release(&mut session, "Space");
        }
        for event in session.frame(DT) {
            match event {
                GameEvent::LifeLost { remaining } => {
                    lives_lost += 1;
                    assert_eq!(remaining, INIT_AMMO - lives_lost);
                    assert_eq!(session.state().ammo_count(), remaining);
                    assert_eq!(session.state().ball.position, BALL_START);
                    assert_eq!(session.state().paddle.position, PADDLE_START);
                    assert_eq!(session.state().ball_vel, Vec2::ZERO);
                }
                GameEvent::HardReset { .. } => {
                    resets += 1;
                    assert_eq!(lives_lost, INIT_AMMO - 1);
                    assert_eq!(session.state().ammo_count(), INIT_AMMO);
                    assert_eq!(session.state().score, 0);
                    assert_eq!(session.state().bricks.len(), ROWS * COLUMNS);
                    lives_lost = 0;
                }
                _ => {}
            }
        }
        if resets > 0 {
            break;
        }
    }
    assert_eq!(resets, 1);
}

#[test]
fn test_time_scaled_session_moves_half_as_far_at_double_rate() {
    let settings = Settings {
        motion: MotionMode::TimeScaled,
        ..Settings::default()
    };
    let mut session = Session::new(settings);
    press(&mut session, "ArrowRight");
    session.frame(DT / 2.0);
    assert!((session.state().paddle.position.x - PADDLE_SPEED / 2.0).abs() < 1e-4);
}

#[test]
fn test_snapshot_tracks_score_and_ammo() {
    let mut settings = Settings::default();
    settings.autopilot = true;
    let mut session = Session::new(settings);
    for _ in 0..3_000 {
        session.frame(DT);
        let snap = session.snapshot();
        let state = session.state();
        assert_eq!(snap.score, state.score);
        assert_eq!(snap.ammo, state.ammo_count());
        assert_eq!(snap.level, state.level);
        assert_eq!(
            snap.count(brick_orbit::sim::EntityKind::Brick),
            state.bricks.len()
        );
    }
}
