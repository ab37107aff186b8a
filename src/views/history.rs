use crate::types::HistoryItem;
use crate::views::shared::{format_response_time, format_timestamp};
use dioxus::prelude::*;

#[component]
pub fn HistoryPanel(history: Vec<HistoryItem>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "panel history-panel",
            div { class: "panel-head",
                h3 { "Query History" }
                button {
                    class: "action-btn",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            if history.is_empty() {
                p { class: "history-empty", "No queries in history" }
            } else {
                div { class: "history-list",
                    for item in history.iter() {
                        HistoryEntry { item: item.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryEntry(item: HistoryItem) -> Element {
    rsx! {
        div { class: "history-item",
            div { class: "history-question",
                strong { "Q: " }
                span { "{item.question}" }
            }
            div { class: "history-answer",
                strong { "A: " }
                span { "{item.answer}" }
            }
            div { class: "history-meta",
                span { "{format_response_time(item.response_time_ms)}" }
                span { "{format_timestamp(&item.timestamp)}" }
            }
        }
    }
}
