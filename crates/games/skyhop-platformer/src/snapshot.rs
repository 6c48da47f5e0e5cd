use serde::{Deserialize, Serialize};

use skyhop_core::game_trait::GamePhase;

use crate::entities::{Entity, Player};
use crate::level::Level;

/// Read-only view of the simulation for the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub level_name: String,
    pub state: GamePhase,
    pub time_left: f32,
    pub time_limit: f32,
    pub collected_coins: u32,
    pub total_coins: u32,
    /// Draw order: platforms, pads, goal, coins, player.
    pub entities: Vec<Entity>,
}

impl LevelSnapshot {
    pub fn capture(level: &Level, player: &Player) -> Self {
        let mut entities = Vec::with_capacity(
            level.platforms().len() + level.pads().len() + level.coins().len() + 2,
        );
        entities.extend(level.platforms().iter().copied().map(Entity::Platform));
        entities.extend(level.pads().iter().copied().map(Entity::Pad));
        entities.push(Entity::Goal(*level.goal()));
        entities.extend(level.coins().iter().copied().map(Entity::Coin));
        entities.push(Entity::Player(player.clone()));

        Self {
            level_name: level.name().to_string(),
            state: level.state(),
            time_left: level.time_left(),
            time_limit: level.time_limit(),
            collected_coins: level.collected_coins(),
            total_coins: level.total_coins(),
            entities,
        }
    }

    /// The player entity, always last in draw order.
    pub fn player(&self) -> Option<&Player> {
        self.entities.iter().rev().find_map(|e| match e {
            Entity::Player(p) => Some(p),
            _ => None,
        })
    }

    /// Encode as MessagePack for transport to a renderer.
    pub fn encode(&self) -> Result<Vec<u8>, rmp_serde::encode::Error> {
        rmp_serde::to_vec_named(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, rmp_serde::decode::Error> {
        rmp_serde::from_slice(bytes)
    }
}
