use log::{debug, error, warn};
use shared::{Wheel, WheelSnapshot};
use yew::prelude::*;

use crate::config::{local_storage, WHEEL_STORAGE_KEY};
use crate::models::WheelStore;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Reads the saved wheel, falling back to the defaults on any problem.
pub fn load_wheel() -> Wheel {
    let Some(storage) = local_storage() else {
        warn!("Local storage unavailable, starting with the default wheel");
        return Wheel::default();
    };

    match storage.get_item(WHEEL_STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<WheelSnapshot>(&raw) {
            Ok(snapshot) => Wheel::from_snapshot(snapshot, now_ms()),
            Err(e) => {
                warn!("Saved wheel is unreadable, using defaults: {}", e);
                Wheel::default()
            }
        },
        Ok(None) => Wheel::default(),
        Err(_) => {
            warn!("Could not read {} from local storage", WHEEL_STORAGE_KEY);
            Wheel::default()
        }
    }
}

pub fn save_wheel(wheel: &Wheel) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(&wheel.to_snapshot()) {
        Ok(json) => {
            if storage.set_item(WHEEL_STORAGE_KEY, &json).is_err() {
                error!("Failed to write {} to local storage", WHEEL_STORAGE_KEY);
            } else {
                debug!("Saved wheel with {} options", wheel.options.len());
            }
        }
        Err(e) => error!("Failed to serialize wheel: {}", e),
    }
}

/// The wheel store, loaded from local storage once and written back whenever the wheel
/// changes outside a spin.
#[hook]
pub fn use_wheel_store() -> UseReducerHandle<WheelStore> {
    let store = use_reducer(|| WheelStore::new(load_wheel()));

    {
        let wheel = store.wheel.clone();
        let is_spinning = store.is_spinning;
        use_effect_with((wheel, is_spinning), move |(wheel, is_spinning)| {
            if !*is_spinning {
                save_wheel(wheel);
            }
            || ()
        });
    }

    store
}
