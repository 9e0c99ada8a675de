use log::{info, warn};
use shared::SpinConfig;
use web_sys::{window, Storage};

pub const WHEEL_STORAGE_KEY: &str = "wheelOfDeciding.v1";
pub const SPIN_CONFIG_KEY: &str = "wheelOfDeciding.spinConfig";

/// How long the wheel frame glows after a result, in milliseconds.
pub const CELEBRATION_MS: u32 = 2500;
/// How long the pointer stays deflected after a tick.
pub const POINTER_NUDGE_MS: f64 = 90.0;

pub fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Spin tuning, optionally overridden by a JSON object stored under [`SPIN_CONFIG_KEY`].
pub fn load_spin_config() -> SpinConfig {
    let raw = match local_storage().and_then(|s| s.get_item(SPIN_CONFIG_KEY).ok().flatten()) {
        Some(raw) => raw,
        None => return SpinConfig::default(),
    };

    match serde_json::from_str::<SpinConfig>(&raw) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                info!("Using spin config override from {}", SPIN_CONFIG_KEY);
                config
            }
            Err(e) => {
                warn!("Ignoring spin config override: {}", e);
                SpinConfig::default()
            }
        },
        Err(e) => {
            warn!("Spin config override is not valid JSON: {}", e);
            SpinConfig::default()
        }
    }
}

/// Frame clock shared with `requestAnimationFrame` timestamps.
pub fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
