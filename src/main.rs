//! Brick Orbit entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs a headless autopilot session and reports how it went.

#[cfg(not(target_arch = "wasm32"))]
use std::collections::BTreeMap;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_orbit::Settings;
    use brick_orbit::consts::REFERENCE_FPS;

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let frames: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(60 * 60);

    let mut settings = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Settings::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read settings from {path}: {e}");
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    settings.autopilot = true;

    log::info!("Brick Orbit (native) starting, {frames} frames");
    let summary = run_headless(settings, frames, 1.0 / REFERENCE_FPS);

    println!("\nHeadless run finished");
    for (name, count) in &summary.events {
        println!("  {name:<16} {count}");
    }
    println!(
        "  score {} | level {} | ammo {} | best score {}",
        summary.score, summary.level, summary.ammo, summary.best_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start
}

#[cfg(not(target_arch = "wasm32"))]
struct Summary {
    events: BTreeMap<&'static str, u64>,
    score: u64,
    level: u32,
    ammo: usize,
    best_score: u64,
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless(settings: brick_orbit::Settings, frames: u64, dt: f32) -> Summary {
    use brick_orbit::Session;
    use brick_orbit::sim::GameEvent;

    let mut session = Session::new(settings);
    let mut events = BTreeMap::new();
    let mut best_score = 0;

    for _ in 0..frames {
        for event in session.frame(dt) {
            let name = match event {
                GameEvent::Launched => "launched",
                GameEvent::PaddleHit => "paddle hits",
                GameEvent::WallBounce(_) => "wall bounces",
                GameEvent::BrickDestroyed { .. } => "bricks",
                GameEvent::LifeLost { .. } => "lives lost",
                GameEvent::HardReset { .. } => "hard resets",
                GameEvent::LevelCleared { .. } => "levels cleared",
            };
            *events.entry(name).or_insert(0) += 1;
        }
        best_score = best_score.max(session.state().score);
    }

    let state = session.state();
    Summary {
        events,
        score: state.score,
        level: state.level,
        ammo: state.ammo_count(),
        best_score,
    }
}
