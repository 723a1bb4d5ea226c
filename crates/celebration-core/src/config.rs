//! Celebration timing and confetti appearance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scheduler::Millis;

/// Delay between "initiate flight" and reaching cruising altitude.
pub const DEFAULT_TAKEOFF_DELAY_MS: Millis = 3000;

/// Confetti pieces per spawned batch.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Interval between confetti batches while celebrating.
pub const DEFAULT_SPAWN_PERIOD_MS: Millis = 2000;

/// How long a batch stays on screen. Matches the slowest fall.
pub const DEFAULT_LIFETIME_MS: Millis = 4000;

/// Errors raised while loading or validating a [`CelebrationConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse celebration config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("batch_size must be greater than zero")]
    ZeroBatchSize,

    #[error("spawn_period_ms must be greater than zero")]
    ZeroPeriod,

    #[error("lifetime_ms must be greater than zero")]
    ZeroLifetime,

    #[error("takeoff_delay_ms must be greater than zero")]
    ZeroTakeoffDelay,

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid range for {field}: {min}..{max}")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}

/// Opaque RGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const GOLD: Color = Color::rgb(0xFF, 0xD7, 0x00);
    pub const SKY: Color = Color::rgb(0x60, 0xA5, 0xFA);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const AMBER: Color = Color::rgb(0xEA, 0xB3, 0x08);
    pub const NAVY: Color = Color::rgb(0x1E, 0x40, 0xAF);

    /// The boarding-pass confetti palette.
    pub fn palette() -> Vec<Color> {
        vec![Self::GOLD, Self::SKY, Self::WHITE, Self::AMBER, Self::NAVY]
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ConfigError::InvalidColor(hex.to_string()))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Half-open `min..max` range of floats. `min == max` means a constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn validate(self, field: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Timing and appearance of the whole celebration.
///
/// Every field has a default, so a partial JSON document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    pub takeoff_delay_ms: Millis,
    pub batch_size: usize,
    pub spawn_period_ms: Millis,
    pub lifetime_ms: Millis,
    pub palette: Vec<Color>,
    pub top_offset_px: f32,
    /// Fall animation duration in seconds.
    pub fall_duration_s: FloatRange,
    /// Fall animation delay in seconds.
    pub fall_delay_s: FloatRange,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            takeoff_delay_ms: DEFAULT_TAKEOFF_DELAY_MS,
            batch_size: DEFAULT_BATCH_SIZE,
            spawn_period_ms: DEFAULT_SPAWN_PERIOD_MS,
            lifetime_ms: DEFAULT_LIFETIME_MS,
            palette: Color::palette(),
            top_offset_px: -20.0,
            fall_duration_s: FloatRange::new(2.0, 4.0),
            fall_delay_s: FloatRange::new(0.0, 0.5),
        }
    }
}

impl CelebrationConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.spawn_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.lifetime_ms == 0 {
            return Err(ConfigError::ZeroLifetime);
        }
        if self.takeoff_delay_ms == 0 {
            return Err(ConfigError::ZeroTakeoffDelay);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        self.fall_duration_s.validate("fall_duration_s")?;
        self.fall_delay_s.validate("fall_delay_s")?;
        Ok(())
    }

    /// Upper bound on live particles in steady state:
    /// `ceil(lifetime / period) * batch_size`.
    pub fn steady_state_bound(&self) -> usize {
        let periods = self
            .lifetime_ms
            .div_ceil(self.spawn_period_ms.max(1)) as usize;
        periods * self.batch_size
    }
}
