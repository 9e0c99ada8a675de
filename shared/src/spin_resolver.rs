use std::f64::consts::TAU;

use log::debug;

use crate::{
    angle::{normalize_angle, slice_angle, POINTER_ANGLE},
    error::WheelError,
    random::RandomSource,
    spin_config::SpinConfig,
};

/// Everything a spin needs, fixed before the first frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinState {
    pub winning_index: usize,
    pub option_count: usize,
    pub start_rotation: f64,
    pub total_delta: f64,
    pub start_time: f64,
    pub duration: f64,
}

impl SpinState {
    pub fn final_rotation(&self) -> f64 {
        self.start_rotation + self.total_delta
    }

    pub fn slice_angle(&self) -> f64 {
        slice_angle(self.option_count)
    }
}

/// The random choices behind a spin, split out so a landing can be reproduced exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinDraw {
    pub winning_index: usize,
    pub revolutions: u32,
    /// Position inside the winning slice, `-0.5..0.5` of the allowed spread.
    pub offset_fraction: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SpinResolver {
    config: SpinConfig,
}

impl SpinResolver {
    /// Rejects configurations that could not land on the chosen option.
    pub fn new(config: SpinConfig) -> Result<Self, WheelError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    /// Picks a winner and the trajectory that lands on it.
    ///
    /// Draws from `rand` in a fixed order: winner, revolutions, offset, duration.
    pub fn resolve<R: RandomSource>(
        &self,
        option_count: usize,
        current_rotation: f64,
        start_time: f64,
        rand: &mut R,
    ) -> Result<SpinState, WheelError> {
        if option_count < 1 {
            return Err(WheelError::InvalidInput(
                "a spin needs at least one option".to_string(),
            ));
        }

        let winning_index = ((rand.next_f64() * option_count as f64).floor() as usize)
            .min(option_count - 1);

        let span = self.config.max_revolutions - self.config.min_revolutions;
        let extra = ((rand.next_f64() * (span + 1) as f64).floor() as u32).min(span);
        let revolutions = self.config.min_revolutions + extra;

        let offset_fraction = rand.next_f64() - 0.5;

        let duration = self.config.min_duration_ms
            + rand.next_f64() * (self.config.max_duration_ms - self.config.min_duration_ms);

        let draw = SpinDraw {
            winning_index,
            revolutions,
            offset_fraction,
        };
        self.resolve_with(option_count, current_rotation, draw, start_time, duration)
    }

    /// Deterministic half of [`SpinResolver::resolve`].
    pub fn resolve_with(
        &self,
        option_count: usize,
        current_rotation: f64,
        draw: SpinDraw,
        start_time: f64,
        duration: f64,
    ) -> Result<SpinState, WheelError> {
        if option_count < 1 {
            return Err(WheelError::InvalidInput(
                "a spin needs at least one option".to_string(),
            ));
        }
        if draw.winning_index >= option_count {
            return Err(WheelError::InvalidInput(format!(
                "winning index {} is out of range for {} options",
                draw.winning_index, option_count
            )));
        }

        let slice = slice_angle(option_count);
        let start_rotation = normalize_angle(current_rotation);
        let target_base = POINTER_ANGLE - (draw.winning_index as f64 * slice + slice / 2.0);
        let offset = draw.offset_fraction.clamp(-0.5, 0.5) * slice * self.config.landing_spread;
        let final_rotation = target_base + draw.revolutions as f64 * TAU + offset;
        let total_delta = final_rotation - start_rotation;

        debug!(
            "spin resolved: winner {} of {}, {} revolutions, delta {:.4} rad over {:.0} ms",
            draw.winning_index, option_count, draw.revolutions, total_delta, duration
        );

        Ok(SpinState {
            winning_index: draw.winning_index,
            option_count,
            start_rotation,
            total_delta,
            start_time,
            duration,
        })
    }
}
