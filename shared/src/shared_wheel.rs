use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    angle::normalize_angle,
    constants::{
        DEFAULT_OPTION_LABELS, DEFAULT_WHEEL_NAME, MAX_HISTORY, MAX_OPTIONS, MAX_WHEEL_NAME_CHARS,
    },
    error::WheelError,
    palette::{swatch_for, Swatch},
    validation::{clean_label, cut_chars, NewOptionInput},
};

/// One labeled segment of the wheel. Position in the list is position on the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelOption {
    pub id: String,
    pub label: String,
    #[serde(skip)]
    pub color_index: usize,
}

impl WheelOption {
    pub fn swatch(&self) -> Swatch {
        swatch_for(self.color_index)
    }
}

fn new_option_id() -> String {
    format!("opt-{}", Uuid::new_v4())
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionList {
    options: Vec<WheelOption>,
}

impl Default for OptionList {
    fn default() -> Self {
        let options = DEFAULT_OPTION_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| WheelOption {
                id: format!("opt-{}", label.to_lowercase()),
                label: label.to_string(),
                color_index: i,
            })
            .collect();
        Self { options }
    }
}

impl OptionList {
    pub fn empty() -> Self {
        Self { options: Vec::new() }
    }

    pub fn as_slice(&self) -> &[WheelOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WheelOption> {
        self.options.get(index)
    }

    pub fn add(&mut self, raw_label: &str) -> Result<&WheelOption, WheelError> {
        let input = NewOptionInput {
            label: raw_label.to_string(),
        };
        if let Err(errors) = input.validate() {
            let code = errors
                .field_errors()
                .get("label")
                .and_then(|errs| errs.first())
                .map(|err| err.code.to_string())
                .unwrap_or_else(|| "invalid_label".to_string());
            return Err(WheelError::InvalidLabel(code));
        }
        if self.options.len() >= MAX_OPTIONS {
            return Err(WheelError::TooManyOptions(MAX_OPTIONS));
        }
        let label = clean_label(raw_label)
            .ok_or_else(|| WheelError::InvalidLabel("empty_label".to_string()))?;

        let color_index = self.options.len();
        self.options.push(WheelOption {
            id: new_option_id(),
            label,
            color_index,
        });
        debug!("option added, {} on the wheel", self.options.len());
        Ok(&self.options[color_index])
    }

    /// Removes the option with `id`; the survivors are recolored by their new positions.
    pub fn remove(&mut self, id: &str) -> Result<WheelOption, WheelError> {
        let position = self
            .options
            .iter()
            .position(|option| option.id == id)
            .ok_or_else(|| WheelError::OptionNotFound(id.to_string()))?;
        let removed = self.options.remove(position);
        self.reassign_colors();
        Ok(removed)
    }

    fn reassign_colors(&mut self) {
        for (i, option) in self.options.iter_mut().enumerate() {
            option.color_index = i;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
    pub result: String,
}

/// Newest-first list of past winners.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinHistory {
    entries: Vec<HistoryEntry>,
}

impl SpinHistory {
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record(&mut self, result: impl Into<String>, ts: i64) {
        self.entries.insert(
            0,
            HistoryEntry {
                ts,
                result: result.into(),
            },
        );
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredOption {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredHistoryEntry {
    #[serde(default)]
    pub ts: Option<i64>,
    #[serde(default)]
    pub result: Option<String>,
}

/// The persisted form of a wheel. Every field is optional on the way in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelSnapshot {
    pub wheel_name: Option<String>,
    pub options: Vec<StoredOption>,
    pub history: Vec<StoredHistoryEntry>,
    pub rotation: Option<f64>,
}

/// Everything the user sees and keeps between visits.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    pub name: String,
    pub options: OptionList,
    pub history: SpinHistory,
    /// Resting rotation in radians.
    pub rotation: f64,
}

impl Default for Wheel {
    fn default() -> Self {
        Self {
            name: DEFAULT_WHEEL_NAME.to_string(),
            options: OptionList::default(),
            history: SpinHistory::default(),
            rotation: 0.0,
        }
    }
}

impl Wheel {
    pub fn reset(&mut self) {
        *self = Wheel::default();
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = cut_chars(name, MAX_WHEEL_NAME_CHARS);
    }

    /// Logs the option at `winning_index` as the newest result.
    pub fn record_result(&mut self, winning_index: usize, ts: i64) -> Option<&HistoryEntry> {
        let label = self.options.get(winning_index)?.label.clone();
        self.history.record(label, ts);
        self.history.latest()
    }

    /// Rebuilds a wheel from stored data, repairing whatever is missing or malformed.
    /// `now_ms` stands in for history entries saved without a timestamp.
    pub fn from_snapshot(snapshot: WheelSnapshot, now_ms: i64) -> Self {
        let name = cut_chars(
            snapshot
                .wheel_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(DEFAULT_WHEEL_NAME),
            MAX_WHEEL_NAME_CHARS,
        );

        let options: Vec<WheelOption> = snapshot
            .options
            .into_iter()
            .filter_map(|stored| {
                let label = clean_label(stored.label.as_deref()?)?;
                let id = stored.id.filter(|id| !id.is_empty()).unwrap_or_else(new_option_id);
                Some((id, label))
            })
            .take(MAX_OPTIONS)
            .enumerate()
            .map(|(color_index, (id, label))| WheelOption { id, label, color_index })
            .collect();

        // Without options the wheel starts over, but stored history is kept.
        let mut wheel = if options.is_empty() {
            debug!("snapshot had no usable options, using defaults");
            Wheel::default()
        } else {
            let rotation = snapshot
                .rotation
                .filter(|r| r.is_finite())
                .map(normalize_angle)
                .unwrap_or(0.0);
            Wheel {
                name,
                options: OptionList { options },
                history: SpinHistory::default(),
                rotation,
            }
        };

        let entries = snapshot
            .history
            .into_iter()
            .take(MAX_HISTORY)
            .filter_map(|stored| {
                let result = stored.result.filter(|r| !r.trim().is_empty())?;
                Some(HistoryEntry {
                    ts: stored.ts.unwrap_or(now_ms),
                    result,
                })
            })
            .collect();

        wheel.history = SpinHistory { entries };
        wheel
    }

    pub fn to_snapshot(&self) -> WheelSnapshot {
        WheelSnapshot {
            wheel_name: Some(self.name.clone()),
            options: self
                .options
                .as_slice()
                .iter()
                .map(|option| StoredOption {
                    id: Some(option.id.clone()),
                    label: Some(option.label.clone()),
                })
                .collect(),
            history: self
                .history
                .entries()
                .iter()
                .map(|entry| StoredHistoryEntry {
                    ts: Some(entry.ts),
                    result: Some(entry.result.clone()),
                })
                .collect(),
            rotation: Some(self.rotation),
        }
    }
}
