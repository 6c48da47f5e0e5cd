use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use skyhop_core::game_trait::{GameEvent, GamePhase, LoseReason};
use skyhop_core::geometry::Vec2;

use crate::config::PhysicsConfig;
use crate::entities::{BouncePad, Coin, Goal, Platform};
use crate::level_data::LevelData;

/// Level entities, countdown, and win/lose state machine.
///
/// Entities are allocated once in [`Level::new`]; `start` resets them in place.
#[derive(Debug, Clone)]
pub struct Level {
    name: String,
    platforms: Vec<Platform>,
    pads: Vec<BouncePad>,
    coins: Vec<Coin>,
    goal: Goal,
    spawn: Vec2,
    time_limit: f32,
    time_left: f32,
    collected_coins: u32,
    state: GamePhase,
    coin_spin_rate: f32,
}

impl Level {
    pub fn new(data: &LevelData, physics: &PhysicsConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(data.seed);
        let coins = data
            .coins
            .iter()
            .map(|&c| {
                let phase = rng.random_range(0.0..std::f32::consts::TAU);
                Coin::new(c, physics.coin_size, phase)
            })
            .collect();

        Self {
            name: data.name.clone(),
            platforms: data.platforms.iter().map(|&body| Platform { body }).collect(),
            pads: data.pads.iter().map(|&body| BouncePad { body }).collect(),
            coins,
            goal: Goal { body: data.goal },
            spawn: data.spawn,
            time_limit: data.time_limit,
            time_left: data.time_limit,
            collected_coins: 0,
            state: GamePhase::Ready,
            coin_spin_rate: physics.coin_spin_rate,
        }
    }

    /// Reset coins, counter and countdown, and enter `Playing`. Valid from any state.
    pub fn start(&mut self) {
        for coin in &mut self.coins {
            coin.reset();
        }
        self.collected_coins = 0;
        self.time_left = self.time_limit;
        self.state = GamePhase::Playing;
        tracing::info!(level = %self.name, time_limit = self.time_limit, "Level started");
    }

    /// Advance the countdown and coin animation. No-op unless playing.
    ///
    /// Returns the lose event when the countdown runs out on this tick.
    pub fn update(&mut self, dt: f32) -> Option<GameEvent> {
        if self.state != GamePhase::Playing {
            return None;
        }

        for coin in &mut self.coins {
            coin.advance(dt, self.coin_spin_rate);
        }

        self.time_left -= dt;
        if self.time_left <= 0.0 {
            self.time_left = 0.0;
            if self.lose(LoseReason::TimeUp) {
                return Some(GameEvent::Lost {
                    reason: LoseReason::TimeUp,
                });
            }
        }
        None
    }

    /// Transition `Playing` → `Win`. Returns false (and does nothing) otherwise.
    pub fn win(&mut self) -> bool {
        if self.state != GamePhase::Playing {
            return false;
        }
        self.state = GamePhase::Win;
        tracing::info!(
            level = %self.name,
            time_left = self.time_left,
            coins = self.collected_coins,
            "Level won"
        );
        true
    }

    /// Transition `Playing` → `Lose`. Returns false (and does nothing) otherwise.
    pub fn lose(&mut self, reason: LoseReason) -> bool {
        if self.state != GamePhase::Playing {
            return false;
        }
        self.state = GamePhase::Lose;
        tracing::info!(level = %self.name, ?reason, "Level lost");
        true
    }

    /// Mark coin `index` collected. Returns false if already collected or out of range.
    pub fn collect_coin(&mut self, index: usize) -> bool {
        match self.coins.get_mut(index) {
            Some(coin) if !coin.collected => {
                coin.collected = true;
                self.collected_coins += 1;
                true
            },
            _ => false,
        }
    }

    pub fn all_coins_collected(&self) -> bool {
        self.collected_coins as usize == self.coins.len()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn pads(&self) -> &[BouncePad] {
        &self.pads
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn state(&self) -> GamePhase {
        self.state
    }

    pub fn time_limit(&self) -> f32 {
        self.time_limit
    }

    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    pub fn collected_coins(&self) -> u32 {
        self.collected_coins
    }

    pub fn total_coins(&self) -> u32 {
        self.coins.len() as u32
    }
}
