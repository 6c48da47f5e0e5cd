use std::path::Path;

use serde::{Deserialize, Serialize};

/// A scripted input sequence, loaded from TOML.
///
/// ```toml
/// frame_rate = 60.0
///
/// [[step]]
/// frames = 30
///
/// [[step]]
/// frames = 90
/// right = true
/// jump = true
/// ```
///
/// `jump` is the held state; press edges are derived from it frame by frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    /// Simulated frames per second. Falls back to the platformer config.
    #[serde(default)]
    pub frame_rate: Option<f32>,
    #[serde(default, rename = "step")]
    pub steps: Vec<ScriptStep>,
}

/// Held controls for a run of consecutive frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub frames: u32,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub jump: bool,
}

#[derive(Debug)]
pub enum ScriptError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse {
        path: String,
        message: String,
    },
    InvalidFrameRate(f32),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {path}: {source}"),
            Self::Parse { path, message } => write!(f, "failed to parse {path}: {message}"),
            Self::InvalidFrameRate(hz) => write!(f, "frame_rate must be positive, got {hz}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl InputScript {
    /// No input at all for `seconds`.
    pub fn idle(seconds: f32, frame_rate: f32) -> Self {
        Self {
            frame_rate: Some(frame_rate),
            steps: vec![ScriptStep {
                frames: (seconds.max(0.0) * frame_rate).ceil() as u32,
                ..Default::default()
            }],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ScriptError> {
        Self::parse("<toml>", content)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path).map_err(|source| ScriptError::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(&path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self, ScriptError> {
        let script: InputScript = toml::from_str(content).map_err(|e| ScriptError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        if let Some(hz) = script.frame_rate
            && (!hz.is_finite() || hz <= 0.0)
        {
            return Err(ScriptError::InvalidFrameRate(hz));
        }
        Ok(script)
    }

    pub fn total_frames(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.frames)).sum()
    }

    /// Held controls for every frame, in order.
    pub fn frames(&self) -> impl Iterator<Item = ScriptStep> + '_ {
        self.steps
            .iter()
            .flat_map(|step| std::iter::repeat_n(*step, step.frames as usize))
    }
}
