pub mod config;
pub mod controller;
pub mod entities;
pub mod level;
pub mod level_data;
pub mod physics;
pub mod snapshot;

use skyhop_core::game_trait::{Game, GameEvent, GameMetadata, GamePhase};
use skyhop_core::input::InputState;
use skyhop_core::time::clamp_frame_dt;

use config::PlatformerConfig;
use controller::{ControlIntent, update_player};
use entities::Player;
use level::Level;
use level_data::{LevelData, default_level};
use snapshot::LevelSnapshot;

/// The simulation context: one level, one player, one config.
///
/// Owned by the host loop and passed nothing global; every tick goes through
/// [`Platformer::update`].
pub struct Platformer {
    level: Level,
    player: Player,
    config: PlatformerConfig,
}

impl Platformer {
    /// Build from already-validated level data.
    pub fn new(data: &LevelData, config: PlatformerConfig) -> Self {
        let physics = &config.physics;
        let player = Player::new(data.spawn, physics.player_width, physics.player_height);
        Self {
            level: Level::new(data, physics),
            player,
            config,
        }
    }

    /// Build with the default config.
    pub fn from_level(data: &LevelData) -> Self {
        Self::new(data, PlatformerConfig::default())
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &PlatformerConfig {
        &self.config
    }

    pub fn snapshot(&self) -> LevelSnapshot {
        LevelSnapshot::capture(&self.level, &self.player)
    }
}

impl Default for Platformer {
    fn default() -> Self {
        Self::from_level(&default_level())
    }
}

impl Game for Platformer {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: self.level.name().to_string(),
            description: "Collect every coin and reach the goal before time runs out.".to_string(),
            time_limit_secs: self.level.time_limit(),
            total_coins: self.level.total_coins(),
        }
    }

    fn start(&mut self) {
        self.level.start();
        self.player.spawn_at(self.level.spawn());
    }

    fn update(&mut self, dt: f32, input: &mut InputState) -> Vec<GameEvent> {
        // Consumed every tick, playing or not.
        let intent = ControlIntent::consume(input);
        let dt = clamp_frame_dt(dt, self.config.max_frame_dt);

        let mut events = Vec::new();
        events.extend(self.level.update(dt));
        if self.level.state() == GamePhase::Playing {
            events.extend(update_player(
                &mut self.player,
                &mut self.level,
                intent,
                dt,
                &self.config.physics,
            ));
        }
        events
    }

    fn phase(&self) -> GamePhase {
        self.level.state()
    }

    fn serialize_state(&self) -> Vec<u8> {
        self.snapshot().encode().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to encode level snapshot");
            Vec::new()
        })
    }
}
