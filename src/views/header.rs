use dioxus::prelude::*;

#[component]
pub fn Header(
    history_count: usize,
    on_view_examples: EventHandler<()>,
    on_view_history: EventHandler<()>,
    on_clear_history: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "header",
            h1 { class: "header-title", "Kenyan Leaders Q&A" }
            p { class: "header-subtitle",
                "Ask questions about Kenyan political leaders, counties, and government positions"
            }
            div { class: "header-actions",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_view_examples.call(()),
                    "View Examples"
                }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_view_history.call(()),
                    "Query History"
                }
                if history_count > 0 {
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_clear_history.call(()),
                        "Clear History"
                    }
                }
            }
        }
    }
}
