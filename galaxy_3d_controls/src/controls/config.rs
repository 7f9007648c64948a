/// Manipulation speed configuration.
///
/// `ControlConfig` is the plain value; `ControlSettings` is the live,
/// thread-safe holder the controllers read on every event, so speeds can be
/// tuned while a gesture is in progress.

use std::sync::{PoisonError, RwLock};
use crate::error::Result;
use crate::{controls_bail, controls_err};

/// Translation speeds for node manipulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlConfig {
    /// World units of translation per pixel of pointer motion, per axis
    pub drag_speed: f32,
    /// World units per scroll-wheel unit. `None` follows `drag_speed`
    /// (see `effective_scroll_speed`).
    pub scroll_speed: Option<f32>,
}

impl ControlConfig {
    pub const DEFAULT_DRAG_SPEED: f32 = 0.01;

    /// Scroll speed multiplier applied to `drag_speed` when no explicit
    /// scroll speed is configured.
    pub const SCROLL_SPEED_FACTOR: f32 = 10.0;

    pub fn new(drag_speed: f32) -> Self {
        Self {
            drag_speed,
            scroll_speed: None,
        }
    }

    pub fn with_drag_speed(mut self, drag_speed: f32) -> Self {
        self.drag_speed = drag_speed;
        self
    }

    pub fn with_scroll_speed(mut self, scroll_speed: Option<f32>) -> Self {
        self.scroll_speed = scroll_speed;
        self
    }

    /// Explicit scroll speed, or `SCROLL_SPEED_FACTOR × drag_speed`.
    pub fn effective_scroll_speed(&self) -> f32 {
        self.scroll_speed
            .unwrap_or(self.drag_speed * Self::SCROLL_SPEED_FACTOR)
    }

    /// Check that every speed is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.drag_speed.is_finite() || self.drag_speed < 0.0 {
            controls_bail!(InvalidConfig, "galaxy3d::ControlConfig",
                "drag speed must be finite and non-negative, got {}", self.drag_speed);
        }
        if let Some(scroll_speed) = self.scroll_speed {
            if !scroll_speed.is_finite() || scroll_speed < 0.0 {
                controls_bail!(InvalidConfig, "galaxy3d::ControlConfig",
                    "scroll speed must be finite and non-negative, got {}", scroll_speed);
            }
        }
        Ok(())
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DRAG_SPEED)
    }
}

/// Live, shared speed settings.
#[derive(Debug, Default)]
pub struct ControlSettings {
    config: RwLock<ControlConfig>,
}

impl ControlSettings {
    /// Create settings from a validated configuration.
    pub fn new(config: ControlConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: RwLock::new(config),
        })
    }

    /// Current configuration.
    pub fn config(&self) -> ControlConfig {
        *self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the configuration. Invalid values leave the settings unchanged.
    pub fn set_config(&self, config: ControlConfig) -> Result<()> {
        config.validate()?;
        let mut lock = self.config.write()
            .map_err(|_| controls_err!(LockPoisoned, "galaxy3d::ControlSettings", "Settings lock poisoned"))?;
        *lock = config;
        Ok(())
    }

    pub fn set_drag_speed(&self, drag_speed: f32) -> Result<()> {
        self.set_config(self.config().with_drag_speed(drag_speed))
    }

    /// `None` restores the `SCROLL_SPEED_FACTOR × drag_speed` default.
    pub fn set_scroll_speed(&self, scroll_speed: Option<f32>) -> Result<()> {
        self.set_config(self.config().with_scroll_speed(scroll_speed))
    }

    pub fn drag_speed(&self) -> f32 {
        self.config().drag_speed
    }

    pub fn scroll_speed(&self) -> f32 {
        self.config().effective_scroll_speed()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
