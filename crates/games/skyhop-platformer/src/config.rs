use serde::{Deserialize, Serialize};

use skyhop_core::time::{MAX_FRAME_DT, frame_dt_bound};

/// Downward acceleration (px/s^2).
pub const GRAVITY: f32 = 2200.0;
/// Horizontal acceleration while a direction is held (px/s^2).
pub const MOVE_ACCEL: f32 = 2600.0;
/// Horizontal speed cap (px/s).
pub const MAX_RUN_SPEED: f32 = 320.0;
/// Ground deceleration with no horizontal input (px/s^2).
pub const FRICTION: f32 = 2400.0;
/// Fraction of `MOVE_ACCEL` available while airborne.
pub const AIR_CONTROL: f32 = 0.6;
/// Upward launch speed of a normal jump (px/s).
pub const JUMP_VELOCITY: f32 = 750.0;
/// Upward launch speed of a bounce pad (px/s).
pub const BOUNCE_VELOCITY: f32 = 1100.0;
/// Terminal fall speed (px/s).
pub const MAX_FALL_SPEED: f32 = 1400.0;
/// Grace window after leaving the ground during which a jump still fires.
pub const COYOTE_WINDOW: f32 = 0.1;
/// How long an early jump press is remembered.
pub const JUMP_BUFFER_WINDOW: f32 = 0.15;
/// Player bounding box width.
pub const PLAYER_WIDTH: f32 = 28.0;
/// Player bounding box height.
pub const PLAYER_HEIGHT: f32 = 40.0;
/// Coin bounding box edge length.
pub const COIN_SIZE: f32 = 20.0;
/// Coin animation speed (rad/s).
pub const COIN_SPIN_RATE: f32 = 4.0;
/// Logical canvas width.
pub const CANVAS_WIDTH: f32 = 960.0;
/// Logical canvas height.
pub const CANVAS_HEIGHT: f32 = 540.0;
/// Falling below this y loses the round.
pub const FALL_OUT_Y: f32 = CANVAS_HEIGHT + 300.0;

/// Tunable platformer physics parameters, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub move_accel: f32,
    pub max_run_speed: f32,
    pub friction: f32,
    pub air_control: f32,
    pub jump_velocity: f32,
    pub bounce_velocity: f32,
    pub max_fall_speed: f32,
    pub coyote_window: f32,
    pub jump_buffer_window: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub coin_size: f32,
    pub coin_spin_rate: f32,
    pub fall_out_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_accel: MOVE_ACCEL,
            max_run_speed: MAX_RUN_SPEED,
            friction: FRICTION,
            air_control: AIR_CONTROL,
            jump_velocity: JUMP_VELOCITY,
            bounce_velocity: BOUNCE_VELOCITY,
            max_fall_speed: MAX_FALL_SPEED,
            coyote_window: COYOTE_WINDOW,
            jump_buffer_window: JUMP_BUFFER_WINDOW,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            coin_size: COIN_SIZE,
            coin_spin_rate: COIN_SPIN_RATE,
            fall_out_y: FALL_OUT_Y,
        }
    }
}

/// Top-level platformer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    pub physics: PhysicsConfig,
    /// Host frame rate the headless runner simulates.
    pub tick_rate_hz: f32,
    /// Longest accepted tick; longer frames are truncated.
    pub max_frame_dt: f32,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            tick_rate_hz: 60.0,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl PlatformerConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("SKYHOP_PLATFORMER_CONFIG")
            .unwrap_or_else(|_| "config/platformer.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_or_default(&path, &content),
            Err(_) => PlatformerConfig::default(),
        }
    }

    fn from_toml_or_default(path: &str, content: &str) -> Self {
        match toml::from_str::<PlatformerConfig>(content) {
            Ok(cfg) => cfg.sanitized(path),
            Err(e) => {
                tracing::warn!("Failed to parse {path}: {e}, using defaults");
                PlatformerConfig::default()
            },
        }
    }

    /// Replace timing values the simulation cannot run with.
    fn sanitized(mut self, path: &str) -> Self {
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            tracing::warn!(
                "Invalid tick_rate_hz {} in {path}, using 60",
                self.tick_rate_hz
            );
            self.tick_rate_hz = 60.0;
        }
        let bound = frame_dt_bound(self.max_frame_dt);
        if bound != self.max_frame_dt {
            tracing::warn!(
                "max_frame_dt {} in {path} outside (0, {MAX_FRAME_DT}], using {bound}",
                self.max_frame_dt
            );
            self.max_frame_dt = bound;
        }
        self
    }
}
