//! Game configuration
//!
//! Everything the simulation and the renderers need is injected through
//! [`GameConfig`]. On the web it is read as JSON from LocalStorage; the
//! native binary reads an optional JSON file.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::renderer::Color;
use crate::renderer::color::DEFAULT_PALETTE;

/// Which rendering backend the web host should bind to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RendererKind {
    #[default]
    Canvas2d,
    WebGpu,
}

impl RendererKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererKind::Canvas2d => "canvas2d",
            RendererKind::WebGpu => "webgpu",
        }
    }
}

/// Which ball the AI paddle follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrackingPolicy {
    /// Always the first ball in the collection, ignoring the rest
    #[default]
    FirstBall,
    /// The ball whose center is horizontally closest to the AI paddle
    Nearest,
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Balls ===
    pub ball_count: usize,
    /// Ball colors, indexed by ball; must hold at least `ball_count` entries
    pub palette: Vec<Color>,
    pub ball_radius_min: f32,
    pub ball_radius_max: f32,
    pub ball_speed_min: f32,
    pub ball_speed_max: f32,
    pub ball_speed_multiplier: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Units per tick
    pub paddle_speed: f32,
    pub player_color: Color,
    pub ai_color: Color,
    pub tracking: TrackingPolicy,
    /// Route AI movement through the same bounds checks as the player paddle
    pub ai_respects_bounds: bool,

    // === Timing ===
    pub tick_rate_hz: f32,
    pub max_substeps: u32,
    /// Seconds
    pub max_frame_delta: f32,

    // === Host ===
    /// RNG seed; `None` lets the host pick one from the clock
    pub seed: Option<u64>,
    pub renderer: RendererKind,
    pub canvas_id: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_count: BALL_COUNT,
            palette: DEFAULT_PALETTE.to_vec(),
            ball_radius_min: BALL_RADIUS_MIN,
            ball_radius_max: BALL_RADIUS_MAX,
            ball_speed_min: BALL_SPEED_MIN,
            ball_speed_max: BALL_SPEED_MAX,
            ball_speed_multiplier: BALL_SPEED_MULTIPLIER,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            player_color: Color::BLUE,
            ai_color: Color::GREEN,
            tracking: TrackingPolicy::FirstBall,
            ai_respects_bounds: false,

            tick_rate_hz: TICK_RATE_HZ,
            max_substeps: MAX_SUBSTEPS,
            max_frame_delta: MAX_FRAME_DELTA,

            seed: None,
            renderer: RendererKind::Canvas2d,
            canvas_id: "gameCanvas".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Seconds per simulation tick
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }

        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("ball_radius_min", self.ball_radius_min)?;
        positive("ball_radius_max", self.ball_radius_max)?;
        positive("ball_speed_min", self.ball_speed_min)?;
        positive("ball_speed_max", self.ball_speed_max)?;
        positive("ball_speed_multiplier", self.ball_speed_multiplier)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("tick_rate_hz", self.tick_rate_hz)?;
        positive("max_frame_delta", self.max_frame_delta)?;

        if self.ball_radius_max <= self.ball_radius_min {
            return Err(ConfigError::Invalid(
                "ball_radius_max must exceed ball_radius_min".into(),
            ));
        }
        if self.ball_speed_max <= self.ball_speed_min {
            return Err(ConfigError::Invalid(
                "ball_speed_max must exceed ball_speed_min".into(),
            ));
        }
        if self.ball_count == 0 {
            return Err(ConfigError::Invalid("ball_count must be at least 1".into()));
        }
        if self.palette.len() < self.ball_count {
            return Err(ConfigError::Invalid(format!(
                "palette has {} colors for {} balls",
                self.palette.len(),
                self.ball_count
            )));
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::Invalid(
                "paddle_height exceeds arena_height".into(),
            ));
        }
        if 2.0 * self.paddle_width >= self.arena_width {
            return Err(ConfigError::Invalid(
                "paddles do not fit side by side in the arena".into(),
            ));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::Invalid("max_substeps must be at least 1".into()));
        }
        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "multiball_pong_config";

    /// Load config from LocalStorage (WASM only), falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {e}"),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load config from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.arena_width, 800.0);
        assert_eq!(config.arena_height, 600.0);
        assert_eq!(config.ball_count, 5);
        assert_eq!(config.palette.len(), 5);
        assert_eq!(config.paddle_speed, 9.0);
        assert_eq!(config.player_color, Color::BLUE);
        assert_eq!(config.ai_color, Color::GREEN);
        assert_eq!(config.tracking, TrackingPolicy::FirstBall);
        assert!(!config.ai_respects_bounds);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "arena_width": 1024.0, "seed": 7 }"#).unwrap();
        assert_eq!(config.arena_width, 1024.0);
        assert_eq!(config.arena_height, 600.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.renderer, RendererKind::Canvas2d);
    }

    #[test]
    fn test_json_roundtrip_preserves_policy() {
        let config = GameConfig {
            tracking: TrackingPolicy::Nearest,
            renderer: RendererKind::WebGpu,
            ..Default::default()
        };
        let parsed = GameConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_short_palette() {
        let config = GameConfig {
            palette: vec![Color::RED, Color::BLUE],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let config = GameConfig {
            ball_radius_min: 30.0,
            ball_radius_max: 10.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            paddle_height: 700.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_overflowing_maxima() {
        // Out of f32 range parses as infinity
        for json in [r#"{ "ball_speed_max": 1e39 }"#, r#"{ "ball_radius_max": 1e39 }"#] {
            assert!(matches!(
                GameConfig::from_json(json),
                Err(ConfigError::Invalid(_))
            ));
        }
    }

    #[test]
    fn test_renderer_kind_names() {
        assert_eq!(RendererKind::WebGpu.as_str(), "webgpu");
        let parsed = GameConfig::from_json(r#"{ "renderer": "WebGpu" }"#).unwrap();
        assert_eq!(parsed.renderer, RendererKind::WebGpu);
    }

    #[test]
    fn test_sim_dt() {
        let config = GameConfig::default();
        assert!((config.sim_dt() - 1.0 / 60.0).abs() < 1e-6);
    }
}
