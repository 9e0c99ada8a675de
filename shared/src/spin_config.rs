use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// Tuning knobs for a spin. None of these affect which option wins; they shape how the
/// wheel gets there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    pub min_revolutions: u32,
    pub max_revolutions: u32,
    /// Fraction of a slice the landing point may wander around the slice center.
    pub landing_spread: f64,
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
    pub easing_exponent: i32,
    /// Crossing detected when the angle moved more than this fraction of a slice...
    pub tick_high_threshold: f64,
    /// ...or less than this fraction.
    pub tick_low_threshold: f64,
    /// Progress past which ticks are no longer emitted.
    pub tick_cutoff: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_revolutions: 6,
            max_revolutions: 9,
            landing_spread: 0.7,
            min_duration_ms: 5500.0,
            max_duration_ms: 7500.0,
            easing_exponent: 5,
            tick_high_threshold: 0.7,
            tick_low_threshold: 0.2,
            tick_cutoff: 0.92,
        }
    }
}

impl SpinConfig {
    pub fn validate(&self) -> Result<(), WheelError> {
        if self.min_revolutions == 0 || self.min_revolutions > self.max_revolutions {
            return Err(WheelError::InvalidConfig(format!(
                "revolutions must satisfy 1 <= min ({}) <= max ({})",
                self.min_revolutions, self.max_revolutions
            )));
        }
        if !(0.0..1.0).contains(&self.landing_spread) {
            return Err(WheelError::InvalidConfig(format!(
                "landing_spread must be in [0, 1), got {}",
                self.landing_spread
            )));
        }
        if !(self.min_duration_ms > 0.0 && self.min_duration_ms <= self.max_duration_ms) {
            return Err(WheelError::InvalidConfig(format!(
                "duration must satisfy 0 < min ({}) <= max ({})",
                self.min_duration_ms, self.max_duration_ms
            )));
        }
        if self.easing_exponent < 3 {
            return Err(WheelError::InvalidConfig(format!(
                "easing_exponent must be at least 3, got {}",
                self.easing_exponent
            )));
        }
        if !(0.0 <= self.tick_low_threshold
            && self.tick_low_threshold < self.tick_high_threshold
            && self.tick_high_threshold <= 1.0)
        {
            return Err(WheelError::InvalidConfig(format!(
                "tick thresholds must satisfy 0 <= low ({}) < high ({}) <= 1",
                self.tick_low_threshold, self.tick_high_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.tick_cutoff) {
            return Err(WheelError::InvalidConfig(format!(
                "tick_cutoff must be in [0, 1], got {}",
                self.tick_cutoff
            )));
        }
        Ok(())
    }
}
