use dioxus::prelude::*;

/// Selectable example questions. Picking one fills the form and closes the
/// panel; submission stays with the user.
#[component]
pub fn ExamplesPanel(
    examples: Vec<String>,
    usage_tip: Option<String>,
    on_close: EventHandler<()>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "panel examples-panel",
            div { class: "panel-head",
                h3 { "Example Questions" }
                button {
                    class: "action-btn",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            div { class: "examples-grid",
                for example in examples {
                    ExampleItem { example, on_select }
                }
            }
            if let Some(tip) = usage_tip {
                p { class: "usage-tip", "{tip}" }
            }
        }
    }
}

#[component]
fn ExampleItem(example: String, on_select: EventHandler<String>) -> Element {
    let label = example.clone();
    rsx! {
        button {
            class: "example-item",
            r#type: "button",
            onclick: move |_| on_select.call(example.clone()),
            "{label}"
        }
    }
}
