use chrono::{Local, TimeZone};
use shared::constants::{EMPTY_HISTORY_MESSAGE, EMPTY_OPTIONS_MESSAGE, MAX_LABEL_CHARS, MAX_OPTIONS};
use shared::{HistoryEntry, OptionList};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::ResultView;
use crate::styles;

/// Local wall-clock time of a history entry as `HH:MM`.
pub fn format_history_time(ts: i64) -> String {
    match Local.timestamp_millis_opt(ts).single() {
        Some(time) => time.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let label = if props.is_spinning { "SPINNING..." } else { "SPIN" };
    let disabled = props.is_spinning;

    html! {
        <button
            type="button"
            class={classes!(styles::SPIN_BUTTON, disabled.then_some(styles::SPIN_BUTTON_DISABLED))}
            onclick={props.onclick.clone()}
            {disabled}
        >
            {label}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub view: ResultView,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let highlight = matches!(props.view, ResultView::Chosen(_));

    html! {
        <div class={classes!(styles::RESULT_CARD, highlight.then_some(styles::RESULT_CARD_WIN))}>
            <p class={styles::RESULT_HEADING}>{props.view.heading()}</p>
            if let Some(value) = props.view.value() {
                <p class={styles::RESULT_VALUE}>{value}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OptionsPanelProps {
    pub options: OptionList,
    pub disabled: bool,
    pub error: String,
    pub on_add: Callback<String>,
    pub on_remove: Callback<String>,
    pub on_reset: Callback<()>,
}

#[function_component(OptionsPanel)]
pub fn options_panel(props: &OptionsPanelProps) -> Html {
    let draft = use_state(String::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_add.emit((*draft).clone());
            draft.set(String::new());
        })
    };

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    let full = props.options.len() >= MAX_OPTIONS;

    html! {
        <div class={styles::PANEL}>
            <div class="flex items-center justify-between mb-3">
                <h2 class={styles::PANEL_TITLE}>
                    {"Options "}
                    <span class={styles::BADGE}>{props.options.len().to_string()}</span>
                </h2>
                <button
                    type="button"
                    class={styles::BUTTON_SECONDARY}
                    onclick={on_reset}
                    disabled={props.disabled}
                >
                    {"Reset"}
                </button>
            </div>

            <form class="flex gap-2" {onsubmit}>
                <input
                    type="text"
                    class={styles::INPUT}
                    placeholder="Add an option"
                    maxlength={MAX_LABEL_CHARS.to_string()}
                    value={(*draft).clone()}
                    {oninput}
                    disabled={props.disabled || full}
                />
                <button
                    type="submit"
                    class={styles::BUTTON_PRIMARY}
                    disabled={props.disabled || full}
                >
                    {"Add"}
                </button>
            </form>
            if !props.error.is_empty() {
                <p class={styles::TEXT_ERROR}>{props.error.clone()}</p>
            }

            <ul class={styles::OPTION_LIST}>
                if props.options.is_empty() {
                    <li class={styles::TEXT_SMALL}>{EMPTY_OPTIONS_MESSAGE}</li>
                }
                { for props.options.as_slice().iter().enumerate().map(|(i, option)| {
                    let on_remove = {
                        let on_remove = props.on_remove.clone();
                        let id = option.id.clone();
                        Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))
                    };
                    let swatch = option.swatch();
                    let dot_style =
                        format!("background-color: {}; color: {}", swatch.solid, swatch.glow);
                    html! {
                        <li key={option.id.clone()} class={styles::OPTION_ITEM}>
                            <span class={styles::TEXT_SMALL}>{format!("{}.", i + 1)}</span>
                            <span class={styles::OPTION_DOT} style={dot_style}></span>
                            <span class="flex-1 truncate">{option.label.clone()}</span>
                            <button
                                type="button"
                                class={styles::BUTTON_ICON}
                                aria-label={format!("Remove {}", option.label)}
                                onclick={on_remove}
                                disabled={props.disabled}
                            >
                                {"×"}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryPanelProps {
    pub entries: Vec<HistoryEntry>,
    pub on_clear: Callback<()>,
}

#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class={styles::PANEL}>
            <div class="flex items-center justify-between mb-3">
                <h2 class={styles::PANEL_TITLE}>{"History"}</h2>
                <button
                    type="button"
                    class={styles::BUTTON_SECONDARY}
                    onclick={on_clear}
                    disabled={props.entries.is_empty()}
                >
                    {"Clear"}
                </button>
            </div>
            <ul class={styles::HISTORY_LIST}>
                if props.entries.is_empty() {
                    <li class={styles::TEXT_SMALL}>{EMPTY_HISTORY_MESSAGE}</li>
                }
                { for props.entries.iter().map(|entry| html! {
                    <li class={styles::HISTORY_ITEM}>
                        <span class="font-medium">{entry.result.clone()}</span>
                        <span class={styles::TEXT_SMALL}>{format_history_time(entry.ts)}</span>
                    </li>
                })}
            </ul>
        </div>
    }
}
