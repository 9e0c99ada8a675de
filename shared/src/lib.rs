pub mod angle;
pub mod constants;
pub mod error;
pub mod palette;
pub mod random;
pub mod shared_wheel;
pub mod spin_animator;
pub mod spin_config;
pub mod spin_resolver;
pub mod validation;
pub mod wheel_renderer;

pub use error::WheelError;
pub use shared_wheel::{HistoryEntry, OptionList, SpinHistory, Wheel, WheelOption, WheelSnapshot};
pub use spin_animator::{FrameOutcome, SpinAnimator, SpinObserver, SpinPhase};
pub use spin_config::SpinConfig;
pub use spin_resolver::{SpinResolver, SpinState};
