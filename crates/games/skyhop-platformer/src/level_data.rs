use std::path::Path;

use serde::{Deserialize, Serialize};

use skyhop_core::geometry::{Rect, Vec2};

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, PhysicsConfig};

/// Static level description, loaded once.
///
/// Field names follow the level file format (`timeLimit`, `spawn`, `goal`,
/// `platforms`, `pads`, `coins`). Coin positions are coin centres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelData {
    #[serde(default = "default_name")]
    pub name: String,
    /// Seeds the cosmetic coin animation offsets.
    #[serde(default)]
    pub seed: u64,
    pub time_limit: f32,
    pub spawn: Vec2,
    pub goal: Rect,
    #[serde(default)]
    pub platforms: Vec<Rect>,
    #[serde(default)]
    pub pads: Vec<Rect>,
    #[serde(default)]
    pub coins: Vec<Vec2>,
}

fn default_name() -> String {
    "Untitled".to_string()
}

/// Rejection reasons for malformed level data.
#[derive(Debug)]
pub enum LevelError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse {
        path: String,
        message: String,
    },
    UnsupportedFormat(String),
    InvalidRect {
        field: &'static str,
        index: Option<usize>,
    },
    InvalidCoin(usize),
    InvalidTimeLimit(f32),
    SpawnOutOfBounds {
        x: f32,
        y: f32,
    },
    SpawnInsideSolid {
        platform: usize,
    },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {path}: {source}"),
            Self::Parse { path, message } => write!(f, "failed to parse {path}: {message}"),
            Self::UnsupportedFormat(path) => {
                write!(f, "unsupported level format for {path} (expected .json or .toml)")
            },
            Self::InvalidRect {
                field,
                index: Some(i),
            } => write!(f, "{field}[{i}] must have finite coordinates and positive size"),
            Self::InvalidRect { field, index: None } => {
                write!(f, "{field} must have finite coordinates and positive size")
            },
            Self::InvalidCoin(i) => write!(f, "coins[{i}] must have a finite position"),
            Self::InvalidTimeLimit(t) => write!(f, "timeLimit must be positive, got {t}"),
            Self::SpawnOutOfBounds { x, y } => {
                write!(f, "spawn ({x}, {y}) places the player outside the canvas")
            },
            Self::SpawnInsideSolid { platform } => {
                write!(f, "spawn overlaps platforms[{platform}]")
            },
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl LevelData {
    /// Parse and validate a JSON level.
    pub fn from_json_str(content: &str, physics: &PhysicsConfig) -> Result<Self, LevelError> {
        let level: LevelData = serde_json::from_str(content).map_err(|e| LevelError::Parse {
            path: "<json>".to_string(),
            message: e.to_string(),
        })?;
        level.validate(physics)?;
        Ok(level)
    }

    /// Parse and validate a TOML level.
    pub fn from_toml_str(content: &str, physics: &PhysicsConfig) -> Result<Self, LevelError> {
        let level: LevelData = toml::from_str(content).map_err(|e| LevelError::Parse {
            path: "<toml>".to_string(),
            message: e.to_string(),
        })?;
        level.validate(physics)?;
        Ok(level)
    }

    /// Load a `.json` or `.toml` level file and validate it.
    pub fn load(path: impl AsRef<Path>, physics: &PhysicsConfig) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: display.clone(),
            source,
        })?;
        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content, physics),
            Some("toml") => Self::from_toml_str(&content, physics),
            _ => return Err(LevelError::UnsupportedFormat(display)),
        };
        parsed.map_err(|e| match e {
            LevelError::Parse { message, .. } => LevelError::Parse {
                path: display.clone(),
                message,
            },
            other => other,
        })
    }

    /// Reject data the simulation cannot run on.
    pub fn validate(&self, physics: &PhysicsConfig) -> Result<(), LevelError> {
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(LevelError::InvalidTimeLimit(self.time_limit));
        }
        if !self.goal.is_well_formed() {
            return Err(LevelError::InvalidRect {
                field: "goal",
                index: None,
            });
        }
        check_rects("platforms", &self.platforms)?;
        check_rects("pads", &self.pads)?;
        if let Some(i) = self
            .coins
            .iter()
            .position(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(LevelError::InvalidCoin(i));
        }

        let canvas = Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
        let spawn_box = Rect::new(
            self.spawn.x,
            self.spawn.y,
            physics.player_width,
            physics.player_height,
        );
        if !spawn_box.is_well_formed() || !canvas.contains_rect(&spawn_box) {
            return Err(LevelError::SpawnOutOfBounds {
                x: self.spawn.x,
                y: self.spawn.y,
            });
        }
        if let Some(platform) = self.platforms.iter().position(|p| p.overlaps(&spawn_box)) {
            return Err(LevelError::SpawnInsideSolid { platform });
        }
        Ok(())
    }
}

fn check_rects(field: &'static str, rects: &[Rect]) -> Result<(), LevelError> {
    match rects.iter().position(|r| !r.is_well_formed()) {
        Some(i) => Err(LevelError::InvalidRect {
            field,
            index: Some(i),
        }),
        None => Ok(()),
    }
}

/// Create the built-in level.
///
/// Layout: full-width floor, a staircase of four ledges rising to the right
/// with the goal on the top ledge, and a bounce pad between the second and
/// third ledges guarding a coin that is out of normal jump reach.
pub fn default_level() -> LevelData {
    LevelData {
        name: "Meadow Climb".to_string(),
        seed: 7,
        time_limit: 60.0,
        spawn: Vec2::new(60.0, 380.0),
        goal: Rect::new(890.0, 120.0, 50.0, 60.0),
        platforms: vec![
            // Floor
            Rect::new(0.0, 500.0, 960.0, 40.0),
            Rect::new(180.0, 420.0, 140.0, 16.0),
            Rect::new(380.0, 340.0, 140.0, 16.0),
            Rect::new(600.0, 260.0, 140.0, 16.0),
            Rect::new(780.0, 180.0, 180.0, 16.0),
        ],
        pads: vec![Rect::new(540.0, 488.0, 50.0, 12.0)],
        coins: vec![
            Vec2::new(250.0, 390.0),
            Vec2::new(450.0, 310.0),
            Vec2::new(565.0, 230.0),
            Vec2::new(810.0, 150.0),
        ],
    }
}
