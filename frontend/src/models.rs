use std::rc::Rc;

use log::{debug, warn};
use shared::constants::READY_MESSAGE;
use shared::Wheel;
use yew::prelude::*;

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Ready,
    Chosen(String),
    LastSpin(String),
}

impl ResultView {
    pub fn heading(&self) -> &'static str {
        match self {
            ResultView::Ready => READY_MESSAGE,
            ResultView::Chosen(_) => "The wheel chose:",
            ResultView::LastSpin(_) => "Last spin:",
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            ResultView::Ready => None,
            ResultView::Chosen(label) | ResultView::LastSpin(label) => Some(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelStore {
    pub wheel: Wheel,
    pub is_spinning: bool,
    /// Winner of the spin that finished in this session.
    pub chosen: Option<String>,
}

impl WheelStore {
    pub fn new(wheel: Wheel) -> Self {
        Self {
            wheel,
            is_spinning: false,
            chosen: None,
        }
    }

    pub fn result_view(&self) -> ResultView {
        if let Some(label) = &self.chosen {
            return ResultView::Chosen(label.clone());
        }
        match self.wheel.history.latest() {
            Some(entry) => ResultView::LastSpin(entry.result.clone()),
            None => ResultView::Ready,
        }
    }
}

pub enum WheelAction {
    AddOption(String),
    RemoveOption(String),
    Rename(String),
    Reset,
    ClearHistory,
    SpinStarted,
    SpinFinished {
        winning_index: usize,
        rotation: f64,
        ts: i64,
    },
    SpinStopped {
        rotation: f64,
    },
}

impl Reducible for WheelStore {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let editing = matches!(
            action,
            WheelAction::AddOption(_) | WheelAction::RemoveOption(_) | WheelAction::Reset
        );
        if editing && self.is_spinning {
            debug!("Ignoring wheel edit while spinning");
            return self;
        }

        let mut next = (*self).clone();
        match action {
            WheelAction::AddOption(label) => {
                if let Err(e) = next.wheel.options.add(&label) {
                    warn!("Option not added: {}", e);
                    return self;
                }
            }
            WheelAction::RemoveOption(id) => {
                if let Err(e) = next.wheel.options.remove(&id) {
                    warn!("Option not removed: {}", e);
                    return self;
                }
            }
            WheelAction::Rename(name) => next.wheel.set_name(&name),
            WheelAction::Reset => {
                next.wheel.reset();
                next.chosen = None;
            }
            WheelAction::ClearHistory => {
                next.wheel.history.clear();
                next.chosen = None;
            }
            WheelAction::SpinStarted => {
                next.is_spinning = true;
                next.chosen = None;
            }
            WheelAction::SpinFinished {
                winning_index,
                rotation,
                ts,
            } => {
                next.is_spinning = false;
                next.wheel.rotation = rotation;
                next.chosen = next
                    .wheel
                    .record_result(winning_index, ts)
                    .map(|entry| entry.result.clone());
                if next.chosen.is_none() {
                    warn!("Winning index {} has no option", winning_index);
                }
            }
            WheelAction::SpinStopped { rotation } => {
                next.is_spinning = false;
                next.wheel.rotation = rotation;
            }
        }
        next.into()
    }
}
