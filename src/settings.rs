//! Game settings
//!
//! Runtime configuration for the simulation and its driver. Nothing here is
//! read from disk or the environment; callers build it in code or parse it
//! from a JSON string.

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_DELAY_MS;

/// When an obstacle counts as cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTrigger {
    /// The next relevant obstacle's left edge equals the flyer's x exactly.
    /// A slot that steps over the flyer's x in a single tick does not score.
    #[default]
    ExactEdge,
    /// A slot whose x moved from right of the flyer's x to at or left of it
    /// during the tick scores, regardless of step size.
    Crossing,
}

impl ScoreTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTrigger::ExactEdge => "exact_edge",
            ScoreTrigger::Crossing => "crossing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "exact_edge" | "exact" => Some(ScoreTrigger::ExactEdge),
            "crossing" | "cross" => Some(ScoreTrigger::Crossing),
            _ => None,
        }
    }
}

/// Simulation and driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for gap offsets (None = derive from the clock)
    pub seed: Option<u64>,
    /// Scoring rule
    pub score_trigger: ScoreTrigger,

    // === Driver ===
    /// Target time per tick in milliseconds (0 = run unpaced)
    pub frame_delay_ms: u64,
    /// Restart automatically after a game over
    pub auto_restart: bool,
    /// Stop the loop after this many ticks
    pub max_ticks: Option<u64>,

    // === Text renderer ===
    pub render_cols: usize,
    pub render_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            score_trigger: ScoreTrigger::ExactEdge,

            frame_delay_ms: FRAME_DELAY_MS,
            auto_restart: false,
            max_ticks: None,

            render_cols: 80,
            render_rows: 30,
        }
    }
}

impl Settings {
    /// Settings for a headless run: unpaced, fixed seed, bounded length
    pub fn headless(seed: u64, max_ticks: u64) -> Self {
        Self {
            seed: Some(seed),
            frame_delay_ms: 0,
            max_ticks: Some(max_ticks),
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.normalize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp values the renderer cannot work with
    pub fn normalize(&mut self) {
        self.render_cols = self.render_cols.max(1);
        self.render_rows = self.render_rows.max(1);
    }

    /// The configured seed, or one derived from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    pub fn frame_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_delay_ms)
    }
}
