use crate::types::QueryResponse;
use crate::views::shared::{format_response_time, format_timestamp, markdown_to_html};
use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(error: String) -> Element {
    rsx! {
        div { class: "error-banner",
            p {
                strong { "Error: " }
                "{error}"
            }
        }
    }
}

#[component]
pub fn ResponsePanel(response: QueryResponse) -> Element {
    let answer_html = markdown_to_html(&response.answer);
    let copy_payload = response.answer.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        div { class: "panel response-panel",
            h3 { "Question" }
            p { class: "response-question", "{response.question}" }
            div { class: "panel-head",
                h3 { "Answer" }
                button { class: "action-btn", title: "Copy answer", onclick: on_copy, "Copy" }
            }
            div { class: "response-answer", dangerous_inner_html: "{answer_html}" }
            div { class: "response-meta",
                span { "Response time: {format_response_time(response.response_time_ms)}" }
                span { "Model: {response.ai_model_used}" }
                span { "{format_timestamp(&response.timestamp)}" }
            }
        }
    }
}
