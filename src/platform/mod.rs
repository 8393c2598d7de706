//! Platform abstraction layer
//!
//! Hosts (browser, native demo) drive the game through [`Session`]:
//! - key codes in, resolved through the configured bindings
//! - one `frame(dt)` call per animation frame
//! - a [`Snapshot`] out for the renderer

use crate::settings::Settings;
use crate::sim::{
    GameEvent, GamePhase, GameState, InputEvent, Key, KeyPhase, Snapshot, apply_input, hard_reset,
    tick,
};

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Distance from the ball's x at which the autopilot stops steering
const AUTOPILOT_DEADZONE: f32 = 0.3;

/// Demo controller that plays by emitting ordinary key events
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: Option<Key>,
}

impl Autopilot {
    /// Key events to send before the next tick
    pub fn plan(&mut self, state: &GameState) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if state.phase == GamePhase::Serving {
            events.push(InputEvent::down(Key::Launch));
            events.push(InputEvent::up(Key::Launch));
        }

        // Vary the aim point so the ball doesn't settle into a loop
        let wobble = (state.time_ticks as f32 * 0.05).sin() * 0.6;
        let offset = state.ball.position.x + wobble - state.paddle.position.x;
        let want = if offset < -AUTOPILOT_DEADZONE {
            Some(Key::Left)
        } else if offset > AUTOPILOT_DEADZONE {
            Some(Key::Right)
        } else {
            None
        };

        // Velocities may have been zeroed by a reset, so re-send the held key
        if let Some(old) = self.held.filter(|&k| Some(k) != want) {
            events.push(InputEvent::up(old));
        }
        if let Some(key) = want {
            events.push(InputEvent::down(key));
        }
        self.held = want;
        events
    }
}

/// A running game bound to its settings
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    settings: Settings,
    autopilot: Option<Autopilot>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let autopilot = settings.autopilot.then(Autopilot::default);
        log::info!(
            "Session started ({:?} motion, autopilot {})",
            settings.motion,
            autopilot.is_some()
        );
        Self {
            state: GameState::new(),
            settings,
            autopilot,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Feed a physical key transition; unbound codes are ignored.
    /// Returns whether the code was bound.
    pub fn key_event(&mut self, code: &str, phase: KeyPhase) -> bool {
        match self.settings.bindings.resolve(code) {
            Some(key) => {
                self.input(InputEvent { key, phase });
                true
            }
            None => false,
        }
    }

    /// Feed an already-resolved game key event
    pub fn input(&mut self, event: InputEvent) {
        apply_input(&mut self.state, event);
    }

    /// Run one tick and hand back everything it produced
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        if let Some(pilot) = self.autopilot.as_mut() {
            for event in pilot.plan(&self.state) {
                apply_input(&mut self.state, event);
            }
        }
        tick(&mut self.state, dt, self.settings.motion);
        self.state.drain_events()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Start over from scratch, as if the last life were lost
    pub fn restart(&mut self) {
        hard_reset(&mut self.state);
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.settings.autopilot = enabled;
        self.autopilot = enabled.then(Autopilot::default);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
