use log::{debug, trace};

use crate::{
    angle::normalize_angle,
    error::WheelError,
    random::RandomSource,
    spin_config::SpinConfig,
    spin_resolver::{SpinResolver, SpinState},
};

/// Decelerating ease: `1 - (1 - t)^exponent`, clamped to `[0, 1]`.
pub fn ease_out(t: f64, exponent: i32) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(exponent)
}

/// Receives the side effects of a spin as they happen.
pub trait SpinObserver {
    fn on_tick(&mut self) {}
    fn on_complete(&mut self, _winning_index: usize, _final_rotation: f64) {}
}

impl SpinObserver for () {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinPhase {
    Idle,
    Spinning(SpinState),
    Completed {
        winning_index: usize,
        final_rotation: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    Idle,
    Running {
        rotation: f64,
        progress: f64,
        ticked: bool,
    },
    Completed {
        winning_index: usize,
        final_rotation: f64,
        ticked: bool,
    },
    Aborted {
        rotation: f64,
    },
}

impl FrameOutcome {
    /// True while another frame should be scheduled.
    pub fn is_running(&self) -> bool {
        matches!(self, FrameOutcome::Running { .. })
    }
}

/// Owns the wheel's rotation and drives it through a spin one frame at a time.
#[derive(Debug, Clone)]
pub struct SpinAnimator {
    resolver: SpinResolver,
    phase: SpinPhase,
    rotation: f64,
    last_tick_angle: f64,
    abort_requested: bool,
}

impl SpinAnimator {
    pub fn new(config: SpinConfig, rotation: f64) -> Result<Self, WheelError> {
        Ok(Self {
            resolver: SpinResolver::new(config)?,
            ..Self::at_rest(rotation)
        })
    }

    /// Idle animator with the default tuning.
    pub fn at_rest(rotation: f64) -> Self {
        let rotation = normalize_angle(rotation);
        Self {
            resolver: SpinResolver::default(),
            phase: SpinPhase::Idle,
            rotation,
            last_tick_angle: rotation,
            abort_requested: false,
        }
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    pub fn config(&self) -> &SpinConfig {
        self.resolver.config()
    }

    /// Moves the resting wheel, e.g. when restoring a saved rotation. Ignored mid-spin.
    pub fn set_rotation(&mut self, rotation: f64) {
        if self.is_spinning() {
            return;
        }
        self.rotation = normalize_angle(rotation);
        self.last_tick_angle = self.rotation;
    }

    /// Starts a spin at frame time `now`. Returns `Ok(None)` without drawing any random
    /// values when a spin is already running.
    pub fn request_spin<R: RandomSource>(
        &mut self,
        option_count: usize,
        now: f64,
        rand: &mut R,
    ) -> Result<Option<SpinState>, WheelError> {
        if self.is_spinning() {
            debug!("spin requested while spinning, ignoring");
            return Ok(None);
        }

        let state = self.resolver.resolve(option_count, self.rotation, now, rand)?;
        self.rotation = state.start_rotation;
        self.last_tick_angle = state.start_rotation;
        self.abort_requested = false;
        self.phase = SpinPhase::Spinning(state);
        Ok(Some(state))
    }

    /// Asks the running spin to stop at the next frame. No completion is reported.
    pub fn abort(&mut self) {
        if self.is_spinning() {
            self.abort_requested = true;
        }
    }

    pub fn advance_frame<O: SpinObserver + ?Sized>(
        &mut self,
        now: f64,
        observer: &mut O,
    ) -> FrameOutcome {
        let state = match self.phase {
            SpinPhase::Spinning(state) => state,
            SpinPhase::Idle | SpinPhase::Completed { .. } => return FrameOutcome::Idle,
        };

        if self.abort_requested {
            self.abort_requested = false;
            self.rotation = normalize_angle(self.rotation);
            self.last_tick_angle = self.rotation;
            self.phase = SpinPhase::Idle;
            debug!("spin aborted at rotation {:.4}", self.rotation);
            return FrameOutcome::Aborted {
                rotation: self.rotation,
            };
        }

        let config = self.resolver.config();
        let progress = if state.duration > 0.0 {
            ((now - state.start_time) / state.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = ease_out(progress, config.easing_exponent);
        self.rotation = state.start_rotation + state.total_delta * eased;

        let slice = state.slice_angle();
        let current = normalize_angle(self.rotation);
        let diff = (current - self.last_tick_angle).abs();
        let mut ticked = false;
        if diff > slice * config.tick_high_threshold || diff < slice * config.tick_low_threshold {
            if progress < config.tick_cutoff {
                trace!("tick at progress {:.3}", progress);
                observer.on_tick();
                ticked = true;
            }
            self.last_tick_angle = current;
        }

        if progress < 1.0 {
            return FrameOutcome::Running {
                rotation: self.rotation,
                progress,
                ticked,
            };
        }

        self.rotation = normalize_angle(self.rotation);
        self.last_tick_angle = self.rotation;
        self.phase = SpinPhase::Completed {
            winning_index: state.winning_index,
            final_rotation: self.rotation,
        };
        debug!(
            "spin completed: winner {} at rotation {:.4}",
            state.winning_index, self.rotation
        );
        observer.on_complete(state.winning_index, self.rotation);

        FrameOutcome::Completed {
            winning_index: state.winning_index,
            final_rotation: self.rotation,
            ticked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::segment_at_pointer;
    use crate::random::{RngSource, SequenceRandom};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::TAU;

    #[derive(Default)]
    struct Recorder {
        ticks: usize,
        completions: Vec<(usize, f64)>,
    }

    impl SpinObserver for Recorder {
        fn on_tick(&mut self) {
            self.ticks += 1;
        }

        fn on_complete(&mut self, winning_index: usize, final_rotation: f64) {
            self.completions.push((winning_index, final_rotation));
        }
    }

    fn run_to_end(
        animator: &mut SpinAnimator,
        recorder: &mut Recorder,
        start: f64,
        step: f64,
    ) -> FrameOutcome {
        let mut now = start;
        loop {
            now += step;
            let outcome = animator.advance_frame(now, recorder);
            if !outcome.is_running() {
                return outcome;
            }
        }
    }

    #[test]
    fn test_ease_out_is_monotone_with_fixed_ends() {
        assert_eq!(ease_out(0.0, 5), 0.0);
        assert_eq!(ease_out(1.0, 5), 1.0);
        let mut previous = 0.0;
        for step in 0..=1000 {
            let value = ease_out(step as f64 / 1000.0, 5);
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(ease_out(-0.5, 5), 0.0);
        assert_eq!(ease_out(1.5, 5), 1.0);
    }

    #[test]
    fn test_spin_lands_on_precommitted_winner() {
        let mut animator = SpinAnimator::new(SpinConfig::default(), 0.0).unwrap();
        let mut rand = SequenceRandom::new(vec![0.5, 0.0, 0.5, 0.0]);
        let state = animator.request_spin(3, 1000.0, &mut rand).unwrap().unwrap();
        assert!(animator.is_spinning());

        let mut recorder = Recorder::default();
        let outcome = run_to_end(&mut animator, &mut recorder, 1000.0, 16.7);

        assert_eq!(
            outcome,
            FrameOutcome::Completed {
                winning_index: 1,
                final_rotation: animator.rotation(),
                ticked: false,
            }
        );
        assert_eq!(recorder.completions.len(), 1);
        assert_eq!(recorder.completions[0].0, state.winning_index);
        assert!((0.0..TAU).contains(&animator.rotation()));
        assert_eq!(segment_at_pointer(animator.rotation(), 3), Some(1));
        assert!(recorder.ticks > 0);
    }

    #[test]
    fn test_spin_request_while_spinning_is_a_no_op() {
        let mut animator = SpinAnimator::new(SpinConfig::default(), 0.0).unwrap();
        let mut rand = SequenceRandom::new(vec![0.1, 0.2, 0.3, 0.4]);
        let first = animator.request_spin(5, 0.0, &mut rand).unwrap();
        assert!(first.is_some());
        assert_eq!(rand.draws(), 4);

        let mut recorder = Recorder::default();
        animator.advance_frame(100.0, &mut recorder);
        let second = animator.request_spin(5, 150.0, &mut rand).unwrap();
        assert!(second.is_none());
        assert_eq!(rand.draws(), 4);

        run_to_end(&mut animator, &mut recorder, 150.0, 50.0);
        assert_eq!(recorder.completions.len(), 1);

        // completion is not repeated by later frames
        assert_eq!(animator.advance_frame(1e9, &mut recorder), FrameOutcome::Idle);
        assert_eq!(recorder.completions.len(), 1);
    }

    #[test]
    fn test_new_spin_allowed_after_completion() {
        let mut animator = SpinAnimator::new(SpinConfig::default(), 2.0).unwrap();
        let mut rand = RngSource(StdRng::seed_from_u64(3));
        let mut recorder = Recorder::default();

        for round in 0..5 {
            let start = round as f64 * 10_000.0;
            let state = animator.request_spin(6, start, &mut rand).unwrap().unwrap();
            run_to_end(&mut animator, &mut recorder, start, 16.0);
            assert_eq!(recorder.completions.last().unwrap().0, state.winning_index);
            assert_eq!(segment_at_pointer(animator.rotation(), 6), Some(state.winning_index));
        }
        assert_eq!(recorder.completions.len(), 5);
    }

    #[test]
    fn test_irregular_frame_timing_still_converges() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut rand = RngSource(StdRng::seed_from_u64(12));
        for option_count in 1..=64 {
            let mut animator =
                SpinAnimator::new(SpinConfig::default(), rng.gen_range(0.0..TAU)).unwrap();
            let state = animator.request_spin(option_count, 0.0, &mut rand).unwrap().unwrap();
            let mut recorder = Recorder::default();
            let mut now = 0.0;
            loop {
                now += rng.gen_range(1.0..250.0);
                if !animator.advance_frame(now, &mut recorder).is_running() {
                    break;
                }
            }
            assert_eq!(recorder.completions, vec![(state.winning_index, animator.rotation())]);
            assert_eq!(
                segment_at_pointer(animator.rotation(), option_count),
                Some(state.winning_index)
            );
        }
    }

    #[test]
    fn test_rotation_follows_easing_curve() {
        let mut animator = SpinAnimator::new(SpinConfig::default(), 0.0).unwrap();
        let mut rand = SequenceRandom::new(vec![0.0, 0.0, 0.5, 0.0]);
        let state = animator.request_spin(4, 0.0, &mut rand).unwrap().unwrap();

        let half = state.duration / 2.0;
        let outcome = animator.advance_frame(half, &mut ());
        let expected = state.start_rotation + state.total_delta * ease_out(0.5, 5);
        match outcome {
            FrameOutcome::Running { rotation, progress, .. } => {
                assert!((rotation - expected).abs() < 1e-9);
                assert!((progress - 0.5).abs() < 1e-12);
            }
            other => panic!("unexpected outcome {other:?}"),
        }

        // a timestamp before the start clamps to t = 0
        let mut early = SpinAnimator::new(SpinConfig::default(), 1.0).unwrap();
        early.request_spin(4, 500.0, &mut rand).unwrap();
        early.advance_frame(100.0, &mut ());
        assert!((early.rotation() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ticks_stop_after_cutoff() {
        let mut animator = SpinAnimator::new(SpinConfig::default(), 0.0).unwrap();
        let mut rand = SequenceRandom::new(vec![0.3, 0.5, 0.5, 0.0]);
        let state = animator.request_spin(8, 0.0, &mut rand).unwrap().unwrap();

        let cutoff_time = state.duration * 0.92;
        let mut now = 0.0;
        let mut late_ticks = 0;
        let mut early_ticks = 0;
        while now < state.duration + 32.0 {
            now += 8.0;
            let mut recorder = Recorder::default();
            animator.advance_frame(now, &mut recorder);
            if now >= cutoff_time {
                late_ticks += recorder.ticks;
            } else {
                early_ticks += recorder.ticks;
            }
        }
        assert!(early_ticks > 0);
        assert_eq!(late_ticks, 0);
    }

    #[test]
    fn test_first_frame_ticks_at_rest_position() {
        // the pointer has not moved yet, which the low threshold counts as a crossing
        let mut animator = SpinAnimator::new(SpinConfig::default(), 0.0).unwrap();
        let mut rand = SequenceRandom::new(vec![0.5, 0.5, 0.5, 0.5]);
        animator.request_spin(4, 0.0, &mut rand).unwrap();
        let mut recorder = Recorder::default();
        let outcome = animator.advance_frame(0.0, &mut recorder);
        assert!(matches!(outcome, FrameOutcome::Running { ticked: true, .. }));
        assert_eq!(recorder.ticks, 1);
    }

    /// Frame time at which the eased rotation reaches `rotation`.
    fn time_at(state: &SpinState, rotation: f64) -> f64 {
        let eased = (rotation - state.start_rotation) / state.total_delta;
        let t = 1.0 - (1.0 - eased).powf(1.0 / 5.0);
        state.start_time + t * state.duration
    }

    #[test]
    fn test_tick_thresholds_and_wraparound() {
        // 4 options: a slice is π/2, so ticks need a move below ~0.31 or above ~1.10 rad
        let mut animator = SpinAnimator::new(SpinConfig::default(), 0.0).unwrap();
        let mut rand = SequenceRandom::new(vec![0.0, 0.0, 0.5, 0.0]);
        let state = animator.request_spin(4, 0.0, &mut rand).unwrap().unwrap();
        assert_eq!(state.start_rotation, 0.0);

        let mut frame = |rotation: f64| {
            let mut recorder = Recorder::default();
            let outcome = animator.advance_frame(time_at(&state, rotation), &mut recorder);
            assert!(outcome.is_running());
            recorder.ticks
        };

        // between the thresholds: no crossing yet
        assert_eq!(frame(0.5), 0);
        // more than 0.7 of a slice past the last tick
        assert_eq!(frame(1.2), 1);
        assert_eq!(frame(1.7), 0);
        assert_eq!(frame(TAU - 0.3), 1);
        // wrapping past 2π moves 0.6 rad, but the normalized angles are far apart
        assert_eq!(frame(TAU + 0.3), 1);
    }

    #[test]
    fn test_tick_reference_moves_after_cutoff() {
        let mut animator = SpinAnimator::new(SpinConfig::default(), 0.0).unwrap();
        let mut rand = SequenceRandom::new(vec![0.0, 0.0, 0.5, 0.0]);
        let state = animator.request_spin(4, 0.0, &mut rand).unwrap().unwrap();

        let mut recorder = Recorder::default();
        animator.advance_frame(time_at(&state, 0.3), &mut recorder);
        assert_eq!(recorder.ticks, 1);
        assert!((animator.last_tick_angle - 0.3).abs() < 1e-9);

        // past the cutoff the wheel is far from the last tick, so a crossing is counted silently
        let late = state.start_time + 0.95 * state.duration;
        let outcome = animator.advance_frame(late, &mut recorder);
        assert!(matches!(outcome, FrameOutcome::Running { ticked: false, .. }));
        assert_eq!(recorder.ticks, 1);
        assert!((animator.last_tick_angle - normalize_angle(animator.rotation())).abs() < 1e-12);
        assert!((animator.last_tick_angle - 0.3).abs() > 1.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let inverted = SpinConfig {
            min_revolutions: 10,
            max_revolutions: 6,
            ..SpinConfig::default()
        };
        assert!(matches!(
            SpinAnimator::new(inverted, 0.0),
            Err(WheelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_abort_stops_without_completion() {
        let mut animator = SpinAnimator::new(SpinConfig::default(), 0.0).unwrap();
        let mut rand = SequenceRandom::new(vec![0.9, 0.9, 0.9, 0.9]);
        animator.request_spin(10, 0.0, &mut rand).unwrap();

        let mut recorder = Recorder::default();
        animator.advance_frame(2000.0, &mut recorder);
        animator.abort();
        let outcome = animator.advance_frame(2016.0, &mut recorder);

        match outcome {
            FrameOutcome::Aborted { rotation } => {
                assert!((0.0..TAU).contains(&rotation));
                assert_eq!(rotation, animator.rotation());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(recorder.completions.is_empty());
        assert_eq!(*animator.phase(), SpinPhase::Idle);
        assert_eq!(animator.advance_frame(3000.0, &mut recorder), FrameOutcome::Idle);
    }

    #[test]
    fn test_zero_options_leaves_animator_idle() {
        let mut animator = SpinAnimator::new(SpinConfig::default(), 0.5).unwrap();
        let mut rand = SequenceRandom::new(vec![0.5]);
        let result = animator.request_spin(0, 0.0, &mut rand);
        assert!(matches!(result, Err(WheelError::InvalidInput(_))));
        assert_eq!(*animator.phase(), SpinPhase::Idle);
        assert_eq!(animator.rotation(), 0.5);
    }

    #[test]
    fn test_set_rotation_is_ignored_mid_spin() {
        let mut animator = SpinAnimator::at_rest(0.0);
        assert_eq!(animator.config(), &SpinConfig::default());
        animator.set_rotation(-1.0);
        assert!((animator.rotation() - (TAU - 1.0)).abs() < 1e-12);

        let mut rand = SequenceRandom::new(vec![0.5]);
        animator.request_spin(2, 0.0, &mut rand).unwrap();
        let before = animator.rotation();
        animator.set_rotation(3.0);
        assert_eq!(animator.rotation(), before);
    }
}
