//! Simulation tuning.
//!
//! Every value here is a tuning constant rather than an invariant: the defaults
//! reproduce the stock panel, and hosts may override any subset from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PetError, PetResult};
use crate::pet::PetSize;

/// Pets closer than this (px) notice each other.
const FRIEND_PROXIMITY: f32 = 48.0;
/// A chasing pet has arrived once within this distance of its friend (px).
const ARRIVE_DISTANCE: f32 = 12.0;
/// Pixels per frame for one speed tier.
const SPEED_UNIT: f32 = 1.0;
/// Forced minimum length of the swipe reaction, in frames.
const SWIPE_FRAMES: u32 = 15;
/// How long a speech bubble stays up, in frames.
const SPEECH_FRAMES: u32 = 120;
/// Per-frame chance of turning around once a walk has run half its course.
const DIRECTION_FLIP_CHANCE: f32 = 0.004;
/// Simulation ticks per second for hosts that drive the panel from a clock.
const TICK_RATE_HZ: f64 = 60.0;

/// Visible area the pets live in. `floor` is the ground line measured from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub floor: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            floor: 0.0,
        }
    }
}

impl Viewport {
    /// Largest left offset a sprite of `width` may take.
    pub fn max_x(&self, width: f32) -> f32 {
        (self.width - width).max(0.0)
    }

    /// Highest bottom offset a sprite of `height` may take.
    pub fn max_y(&self, height: f32) -> f32 {
        (self.height - height).max(self.floor)
    }
}

/// Sprite width and speed multiplier for one pet size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeParams {
    pub width: f32,
    pub speed_scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeTable {
    pub nano: SizeParams,
    pub small: SizeParams,
    pub medium: SizeParams,
    pub large: SizeParams,
}

impl Default for SizeTable {
    fn default() -> Self {
        Self {
            nano: SizeParams { width: 30.0, speed_scale: 0.6 },
            small: SizeParams { width: 40.0, speed_scale: 0.8 },
            medium: SizeParams { width: 55.0, speed_scale: 1.0 },
            large: SizeParams { width: 110.0, speed_scale: 1.3 },
        }
    }
}

impl SizeTable {
    pub fn get(&self, size: PetSize) -> SizeParams {
        match size {
            PetSize::Nano => self.nano,
            PetSize::Small => self.small,
            PetSize::Medium => self.medium,
            PetSize::Large => self.large,
        }
    }
}

/// Thrown ball physics, per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub gravity: f32,
    pub bounce: f32,
    pub friction: f32,
    /// Below this speed the ball comes to rest.
    pub min_speed: f32,
    /// Frames before an uncaught ball disappears.
    pub lifetime_frames: u32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 8.0,
            gravity: 0.4,
            bounce: 0.75,
            friction: 0.995,
            min_speed: 0.2,
            lifetime_frames: 1800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub viewport: Viewport,
    pub friend_proximity: f32,
    pub arrive_distance: f32,
    pub speed_unit: f32,
    pub sizes: SizeTable,
    pub swipe_frames: u32,
    pub speech_frames: u32,
    pub direction_flip_chance: f32,
    /// Pets older than this many frames start dying. `None` keeps them forever.
    pub lifespan_frames: Option<u64>,
    pub ball: BallConfig,
    pub tick_rate_hz: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            friend_proximity: FRIEND_PROXIMITY,
            arrive_distance: ARRIVE_DISTANCE,
            speed_unit: SPEED_UNIT,
            sizes: SizeTable::default(),
            swipe_frames: SWIPE_FRAMES,
            speech_frames: SPEECH_FRAMES,
            direction_flip_chance: DIRECTION_FLIP_CHANCE,
            lifespan_frames: None,
            ball: BallConfig::default(),
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> PetResult<Self> {
        let config: SimConfig =
            serde_json::from_str(text).map_err(|e| PetError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> PetResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> PetResult<()> {
        let vp = &self.viewport;
        if !(vp.width > 0.0 && vp.height > 0.0) {
            return Err(PetError::config(format!(
                "viewport must be non-empty, got {}x{}",
                vp.width, vp.height
            )));
        }
        if !(vp.floor >= 0.0 && vp.floor < vp.height) {
            return Err(PetError::config(format!(
                "floor {} outside viewport height {}",
                vp.floor, vp.height
            )));
        }
        if self.friend_proximity < 0.0 || self.arrive_distance < 0.0 {
            return Err(PetError::config("distances must be non-negative"));
        }
        for size in PetSize::ALL {
            let p = self.sizes.get(size);
            if !(p.width > 0.0 && p.speed_scale >= 0.0) {
                return Err(PetError::config(format!("bad size params for {size}")));
            }
        }
        if self.swipe_frames == 0 {
            return Err(PetError::config("swipe_frames must be at least 1"));
        }
        if !(self.tick_rate_hz > 0.0) {
            return Err(PetError::config("tick_rate_hz must be positive"));
        }
        Ok(())
    }

    /// Sprite width (px) for a size. Sprites are square.
    pub fn sprite_width(&self, size: PetSize) -> f32 {
        self.sizes.get(size).width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SimConfig::from_json(r#"{ "viewport": { "width": 300 }, "lifespan_frames": 600 }"#)
            .unwrap();
        assert_eq!(cfg.viewport.width, 300.0);
        assert_eq!(cfg.viewport.height, Viewport::default().height);
        assert_eq!(cfg.lifespan_frames, Some(600));
        assert_eq!(cfg.swipe_frames, SWIPE_FRAMES);
    }

    #[test]
    fn rejects_empty_viewport() {
        let err = SimConfig::from_json(r#"{ "viewport": { "width": 0 } }"#).unwrap_err();
        assert!(matches!(err, PetError::Config(_)));
    }

    #[test]
    fn max_x_never_negative() {
        let vp = Viewport { width: 20.0, height: 100.0, floor: 0.0 };
        assert_eq!(vp.max_x(55.0), 0.0);
        assert_eq!(vp.max_x(10.0), 10.0);
    }
}
