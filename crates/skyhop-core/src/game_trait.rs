use serde::{Deserialize, Serialize};

use crate::input::InputState;

/// Core trait implemented by a Skyhop simulation.
///
/// The host loop owns the game and the input record, calls `update` once per
/// rendered frame, and hands `serialize_state` output to the renderer. The
/// game handles only simulation; drawing, audio and HUD react to the
/// returned events.
pub trait Game {
    /// Metadata for title screens and logs.
    fn metadata(&self) -> GameMetadata;

    /// Reset all mutable state and enter [`GamePhase::Playing`].
    fn start(&mut self);

    /// Advance one tick. Consumes the input's jump press edge.
    fn update(&mut self, dt: f32, input: &mut InputState) -> Vec<GameEvent>;

    /// Current phase of the round.
    fn phase(&self) -> GamePhase;

    /// Serialize a read-only snapshot for the rendering collaborator.
    fn serialize_state(&self) -> Vec<u8>;

    /// Whether the round has reached a win or lose state.
    fn is_round_complete(&self) -> bool {
        self.phase().is_terminal()
    }
}

/// Descriptive metadata for a game or level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub time_limit_secs: f32,
    pub total_coins: u32,
}

/// Round phase. `Win` and `Lose` are terminal until the next `start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Ready,
    Playing,
    Win,
    Lose,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Win | GamePhase::Lose)
    }
}

/// Why a round was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoseReason {
    TimeUp,
    FellOut,
}

/// Events emitted by a game during update, for overlay and audio feedback.
///
/// `Won` and `Lost` fire only on the transition edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    Bounced,
    CoinCollected { collected: u32, total: u32 },
    Won { time_left: f32 },
    Lost { reason: LoseReason },
}

impl GameEvent {
    /// Whether this event marks the end of the round.
    pub fn is_round_end(&self) -> bool {
        matches!(self, GameEvent::Won { .. } | GameEvent::Lost { .. })
    }
}
