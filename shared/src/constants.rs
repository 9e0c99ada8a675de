pub const MAX_OPTIONS: usize = 64;
pub const MAX_LABEL_CHARS: usize = 80;
pub const MAX_WHEEL_NAME_CHARS: usize = 60;
pub const MAX_HISTORY: usize = 30;

pub const DEFAULT_WHEEL_NAME: &str = "What should we do?";
pub const DEFAULT_OPTION_LABELS: [&str; 3] = ["Yes", "No", "Maybe"];

pub const NO_OPTIONS_ERROR: &str = "Add at least one option first!";
pub const EMPTY_LABEL_ERROR: &str = "Type an option before adding it";
pub const EMPTY_OPTIONS_MESSAGE: &str = "No options yet. Add your first choice above!";
pub const EMPTY_HISTORY_MESSAGE: &str = "No spins yet. Give the wheel a spin!";
pub const READY_MESSAGE: &str = "Ready to spin!";

pub fn max_options_error() -> String {
    format!("Maximum {} options allowed.", MAX_OPTIONS)
}
