use crate::state::MAX_QUESTION_CHARS;
use dioxus::events::Key;
use dioxus::prelude::*;

#[component]
pub fn QueryForm(
    question: String,
    loading: bool,
    on_edit: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let char_count = question.chars().count();
    let disabled = loading || question.trim().is_empty();

    rsx! {
        form { class: "query-form",
            label { class: "query-label", r#for: "question", "Your Question" }
            textarea {
                id: "question",
                class: "query-input",
                rows: "3",
                maxlength: "{MAX_QUESTION_CHARS}",
                placeholder: "e.g., Who is the governor of Meru County?",
                value: "{question}",
                disabled: loading,
                oninput: move |ev| on_edit.call(ev.value()),
                onkeydown: move |ev| {
                    if ev.key() == Key::Enter && !ev.modifiers().shift() {
                        ev.prevent_default();
                        on_submit.call(());
                    }
                },
                autofocus: true,
            }
            div { class: "char-counter", "{char_count}/{MAX_QUESTION_CHARS} characters" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: disabled,
                onclick: move |_| on_submit.call(()),
                if loading { "Getting Answer…" } else { "Ask Question" }
            }
        }
    }
}
