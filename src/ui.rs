use crate::api;
use crate::config;
use crate::state::{Action, AppState};
use crate::views::{ErrorBanner, ExamplesPanel, Header, HistoryPanel, QueryForm, ResponsePanel};
use dioxus::prelude::*;
use std::time::Duration;
use tracing::warn;

const APP_CSS: Asset = asset!("/assets/viongozi.css");
const NOTICE_HIDE_DELAY: Duration = Duration::from_secs(4);

/// Root component. Owns the single state container and exposes the four
/// capabilities (submit, load examples, load history, clear history) as
/// callbacks; the view tree below is stateless and performs no I/O of its
/// own.
#[component]
pub fn App() -> Element {
    let mut state = use_signal(AppState::default);

    let submit = move |_: ()| {
        let Some(ticket) = state.with_mut(|s| s.begin_submission()) else {
            return;
        };
        spawn(async move {
            let base = config::api_base_url();
            let action = match api::submit_question(&base, &ticket.question).await {
                Ok(response) => Action::SubmitOk {
                    seq: ticket.seq,
                    response,
                },
                Err(err) => Action::SubmitErr {
                    seq: ticket.seq,
                    message: err.to_string(),
                },
            };
            state.with_mut(|s| s.apply(action));
        });
    };

    // Secondary flows: failures are logged and otherwise swallowed, leaving
    // the current collections untouched.
    let load_examples = move |_: ()| {
        spawn(async move {
            let base = config::api_base_url();
            match api::fetch_examples(&base).await {
                Ok(set) => state.with_mut(|s| s.apply(Action::LoadExamplesOk(set))),
                Err(err) => warn!("failed to fetch examples: {err}"),
            }
        });
    };

    let load_history = move |_: ()| {
        spawn(async move {
            let base = config::api_base_url();
            match api::fetch_history(&base).await {
                Ok(items) => state.with_mut(|s| s.apply(Action::LoadHistoryOk(items))),
                Err(err) => warn!("failed to fetch history: {err}"),
            }
        });
    };

    let clear_history = move |_: ()| {
        spawn(async move {
            let base = config::api_base_url();
            match api::clear_history(&base).await {
                Ok(ack) => {
                    let message = ack
                        .map(|a| a.message)
                        .unwrap_or_else(|| "Query history cleared".to_string());
                    state.with_mut(|s| s.apply(Action::ClearHistoryOk { message }));
                    tokio::time::sleep(NOTICE_HIDE_DELAY).await;
                    state.with_mut(|s| s.apply(Action::DismissNotice));
                }
                Err(err) => warn!("failed to clear history: {err}"),
            }
        });
    };

    let view = state();

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        div { class: "page",
            Header {
                history_count: view.history.len(),
                on_view_examples: load_examples,
                on_view_history: load_history,
                on_clear_history: clear_history,
            }
            if view.show_examples && !view.examples.is_empty() {
                ExamplesPanel {
                    examples: view.examples.clone(),
                    usage_tip: view.usage_tip.clone(),
                    on_close: move |_| state.with_mut(|s| s.apply(Action::HideExamples)),
                    on_select: move |example| state.with_mut(|s| s.apply(Action::SelectExample(example))),
                }
            }
            QueryForm {
                question: view.question.clone(),
                loading: view.loading,
                on_edit: move |text| state.with_mut(|s| s.apply(Action::EditQuestion(text))),
                on_submit: submit,
            }
            if let Some(error) = view.error.clone() {
                ErrorBanner { error }
            }
            if let Some(notice) = view.notice.clone() {
                div { class: "notice", "{notice}" }
            }
            if let Some(response) = view.response.clone() {
                ResponsePanel { response }
            }
            if view.show_history {
                HistoryPanel {
                    history: view.history.clone(),
                    on_close: move |_| state.with_mut(|s| s.apply(Action::HideHistory)),
                }
            }
            footer { class: "page-footer",
                p { "Powered by Google Gemini 2.0 Flash" }
            }
        }
    }
}
