//! Browser binding
//!
//! The JS side owns the three.js scene and the `requestAnimationFrame` loop.
//! It forwards keyboard events here and redraws from `snapshot_json` after
//! each `frame` call.

use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use super::Session;
use crate::settings::Settings;
use crate::sim::KeyPhase;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Brick Orbit core loaded");
}

/// Game session exposed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a session from a JSON settings string (empty for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> WebGame {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json_or_default(settings_json)
        };
        WebGame {
            session: Session::new(settings),
        }
    }

    /// Returns true if the key is bound, so the caller can `preventDefault`
    pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
        if event.repeat() {
            return false;
        }
        self.session.key_event(&event.code(), KeyPhase::Down)
    }

    pub fn key_up(&mut self, event: &KeyboardEvent) -> bool {
        self.session.key_event(&event.code(), KeyPhase::Up)
    }

    /// Advance one frame; `dt` is in seconds. Returns the frame's events as JSON.
    pub fn frame(&mut self, dt: f32) -> String {
        let events = self.session.frame(dt);
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::warn!("Could not encode events: {e}");
            "[]".to_string()
        })
    }

    /// Current scene state for the renderer
    pub fn snapshot_json(&self) -> String {
        let snapshot = self.session.snapshot();
        serde_json::to_string(&snapshot).unwrap_or_else(|e| {
            log::warn!("Could not encode snapshot: {e}");
            "{}".to_string()
        })
    }

    pub fn restart(&mut self) {
        self.session.restart();
        log::info!("Game restarted");
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.session.set_autopilot(enabled);
    }
}
