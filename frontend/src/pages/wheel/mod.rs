mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use shared::constants::{
    max_options_error, EMPTY_LABEL_ERROR, MAX_OPTIONS, MAX_WHEEL_NAME_CHARS, NO_OPTIONS_ERROR,
};
use shared::random::OsRandom;
use shared::validation::validate_option_label;
use shared::{FrameOutcome, SpinAnimator, SpinObserver};
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::config::{load_spin_config, performance_now, CELEBRATION_MS, POINTER_NUDGE_MS};
use crate::hooks::{use_form_state, use_wheel_store};
use crate::models::WheelAction;
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_utils::{HistoryPanel, OptionsPanel, ResultDisplay, SpinButton};

/// Forwards animator events into component callbacks.
struct PageObserver {
    now: f64,
    on_tick: Callback<f64>,
    on_complete: Callback<(usize, f64)>,
}

impl SpinObserver for PageObserver {
    fn on_tick(&mut self) {
        self.on_tick.emit(self.now);
    }

    fn on_complete(&mut self, winning_index: usize, final_rotation: f64) {
        self.on_complete.emit((winning_index, final_rotation));
    }
}

/// Drives the animator from `requestAnimationFrame` until the spin settles.
#[derive(Clone)]
struct FrameLoop {
    animator: Rc<RefCell<SpinAnimator>>,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    on_rotation: Callback<f64>,
    on_tick: Callback<f64>,
    on_complete: Callback<(usize, f64)>,
    on_abort: Callback<f64>,
}

impl FrameLoop {
    fn schedule(&self) {
        let next = self.clone();
        let handle = request_animation_frame(move |now| next.step(now));
        *self.pending.borrow_mut() = Some(handle);
    }

    fn step(&self, now: f64) {
        let mut observer = PageObserver {
            now,
            on_tick: self.on_tick.clone(),
            on_complete: self.on_complete.clone(),
        };
        let outcome = self.animator.borrow_mut().advance_frame(now, &mut observer);

        match outcome {
            FrameOutcome::Running { rotation, .. } => {
                self.on_rotation.emit(rotation);
                self.schedule();
            }
            FrameOutcome::Completed { final_rotation, .. } => {
                self.on_rotation.emit(final_rotation);
            }
            FrameOutcome::Aborted { rotation } => self.on_abort.emit(rotation),
            FrameOutcome::Idle => {}
        }
    }
}

fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    let store = use_wheel_store();
    let form = use_form_state();

    let rotation = use_state(|| store.wheel.rotation);
    let last_tick = use_state(|| f64::NEG_INFINITY);
    let celebrating = use_state(|| false);
    let celebration_timer = use_mut_ref(|| None::<Timeout>);

    let animator = {
        let resting = store.wheel.rotation;
        use_mut_ref(move || {
            SpinAnimator::new(load_spin_config(), resting).unwrap_or_else(|e| {
                warn!("Spin config rejected, using defaults: {}", e);
                SpinAnimator::at_rest(resting)
            })
        })
    };
    let pending_frame = use_mut_ref(|| None::<AnimationFrame>);

    // Leaving mid-spin stops the wheel where it is.
    {
        let animator = animator.clone();
        let pending_frame = pending_frame.clone();
        use_effect_with((), move |_| {
            move || {
                pending_frame.borrow_mut().take();
                let mut animator = animator.borrow_mut();
                if animator.is_spinning() {
                    animator.abort();
                    let outcome = animator.advance_frame(performance_now(), &mut ());
                    if let FrameOutcome::Aborted { rotation } = outcome {
                        debug!("Spin aborted on unmount at {:.3} rad", rotation);
                    }
                }
            }
        });
    }

    let frame_loop = FrameLoop {
        animator: animator.clone(),
        pending: pending_frame.clone(),
        on_rotation: {
            let rotation = rotation.clone();
            Callback::from(move |value: f64| rotation.set(value))
        },
        on_tick: {
            let last_tick = last_tick.clone();
            Callback::from(move |now: f64| last_tick.set(now))
        },
        on_complete: {
            let store = store.clone();
            let celebrating = celebrating.clone();
            let celebration_timer = celebration_timer.clone();
            Callback::from(move |(winning_index, final_rotation): (usize, f64)| {
                store.dispatch(WheelAction::SpinFinished {
                    winning_index,
                    rotation: final_rotation,
                    ts: chrono::Utc::now().timestamp_millis(),
                });

                celebrating.set(true);
                let celebrating = celebrating.clone();
                *celebration_timer.borrow_mut() = Some(Timeout::new(CELEBRATION_MS, move || {
                    celebrating.set(false);
                }));
            })
        },
        on_abort: {
            let store = store.clone();
            let rotation = rotation.clone();
            Callback::from(move |value: f64| {
                rotation.set(value);
                store.dispatch(WheelAction::SpinStopped { rotation: value });
            })
        },
    };

    let on_spin = {
        let store = store.clone();
        let animator = animator.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let option_count = store.wheel.options.len();
            if option_count == 0 {
                form.handle_error.emit(NO_OPTIONS_ERROR.to_string());
                return;
            }

            let started = animator
                .borrow_mut()
                .request_spin(option_count, performance_now(), &mut OsRandom);
            match started {
                Ok(Some(state)) => {
                    info!("Spinning {} options", option_count);
                    debug!("Spin will settle in {:.0} ms", state.duration);
                    form.clear.emit(());
                    store.dispatch(WheelAction::SpinStarted);
                    frame_loop.schedule();
                }
                Ok(None) => debug!("Spin already running"),
                Err(e) => {
                    warn!("Spin rejected: {}", e);
                    form.handle_error.emit(e.to_string());
                }
            }
        })
    };

    let on_add = {
        let store = store.clone();
        let form = form.clone();
        Callback::from(move |label: String| {
            if validate_option_label(&label).is_err() {
                form.handle_error.emit(EMPTY_LABEL_ERROR.to_string());
                return;
            }
            if store.wheel.options.len() >= MAX_OPTIONS {
                form.handle_error.emit(max_options_error());
                return;
            }
            form.clear.emit(());
            store.dispatch(WheelAction::AddOption(label));
        })
    };

    let on_remove = {
        let store = store.clone();
        Callback::from(move |id: String| store.dispatch(WheelAction::RemoveOption(id)))
    };

    let on_reset = {
        let store = store.clone();
        let rotation = rotation.clone();
        let animator = animator.clone();
        let form = form.clone();
        Callback::from(move |_: ()| {
            if store.is_spinning || !confirm("Clear all options and start fresh?") {
                return;
            }
            animator.borrow_mut().set_rotation(0.0);
            rotation.set(0.0);
            form.clear.emit(());
            store.dispatch(WheelAction::Reset);
        })
    };

    let on_clear_history = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            if confirm("Clear spin history?") {
                store.dispatch(WheelAction::ClearHistory);
            }
        })
    };

    let on_rename = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.dispatch(WheelAction::Rename(input.value()));
        })
    };

    let pointer_nudged = store.is_spinning && performance_now() - *last_tick < POINTER_NUDGE_MS;

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <section class={styles::CARD}>
                    <input
                        type="text"
                        class={styles::NAME_INPUT}
                        aria-label="Wheel name"
                        maxlength={MAX_WHEEL_NAME_CHARS.to_string()}
                        value={store.wheel.name.clone()}
                        oninput={on_rename}
                    />
                    <WheelCanvas
                        options={store.wheel.options.clone()}
                        rotation={*rotation}
                        is_spinning={store.is_spinning}
                        celebrating={*celebrating}
                        {pointer_nudged}
                    />
                    <div class="flex justify-center mt-8">
                        <SpinButton is_spinning={store.is_spinning} onclick={on_spin} />
                    </div>
                    <ResultDisplay view={store.result_view()} />
                </section>

                <aside class="space-y-6">
                    <OptionsPanel
                        options={store.wheel.options.clone()}
                        disabled={store.is_spinning}
                        error={form.error.clone()}
                        {on_add}
                        {on_remove}
                        {on_reset}
                    />
                    <HistoryPanel
                        entries={store.wheel.history.entries().to_vec()}
                        on_clear={on_clear_history}
                    />
                </aside>
            </div>
        </div>
    }
}
