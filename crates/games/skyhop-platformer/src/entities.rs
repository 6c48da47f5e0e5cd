use serde::{Deserialize, Serialize};

use skyhop_core::geometry::{Rect, Vec2};

/// Static solid geometry. Immutable after level load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub body: Rect,
}

/// Static launch trigger; fires when the player lands on it from above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BouncePad {
    pub body: Rect,
}

/// Exit region. Only counts once every coin is collected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub body: Rect,
}

/// Collectible coin on the level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub body: Rect,
    /// Cosmetic animation phase in radians. Never read by gameplay.
    pub phase: f32,
    pub collected: bool,
}

impl Coin {
    pub fn new(center: Vec2, size: f32, phase: f32) -> Self {
        Self {
            body: Rect::centered(center.x, center.y, size, size),
            phase,
            collected: false,
        }
    }

    /// Mark uncollected again without touching identity or animation.
    pub fn reset(&mut self) {
        self.collected = false;
    }

    pub fn advance(&mut self, dt: f32, spin_rate: f32) {
        self.phase += spin_rate * dt;
    }
}

/// Horizontal facing, flipped by the last non-zero horizontal input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player-controlled body, the only moving entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Rect,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub facing: Facing,
    /// Seconds left in the coyote window. Only positivity is meaningful.
    pub coyote_time: f32,
    /// Seconds left in the jump buffer. Only positivity is meaningful.
    pub jump_buffer: f32,
}

impl Player {
    pub fn new(spawn: Vec2, width: f32, height: f32) -> Self {
        Self {
            body: Rect::new(spawn.x, spawn.y, width, height),
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            facing: Facing::default(),
            coyote_time: 0.0,
            jump_buffer: 0.0,
        }
    }

    /// Move to `spawn` and clear all kinematic state.
    pub fn spawn_at(&mut self, spawn: Vec2) {
        self.body.x = spawn.x;
        self.body.y = spawn.y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_ground = false;
        self.coyote_time = 0.0;
        self.jump_buffer = 0.0;
    }
}

/// Entity kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Platform,
    Pad,
    Coin,
    Goal,
    Player,
}

/// Any drawable entity. Renderers switch over the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Entity {
    Platform(Platform),
    Pad(BouncePad),
    Coin(Coin),
    Goal(Goal),
    Player(Player),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Platform(_) => EntityKind::Platform,
            Entity::Pad(_) => EntityKind::Pad,
            Entity::Coin(_) => EntityKind::Coin,
            Entity::Goal(_) => EntityKind::Goal,
            Entity::Player(_) => EntityKind::Player,
        }
    }

    pub fn body(&self) -> Rect {
        match self {
            Entity::Platform(p) => p.body,
            Entity::Pad(p) => p.body,
            Entity::Coin(c) => c.body,
            Entity::Goal(g) => g.body,
            Entity::Player(p) => p.body,
        }
    }
}
