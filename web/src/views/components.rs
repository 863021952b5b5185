use dioxus::prelude::*;

/// Confirmation dialog gating a destructive action. The action runs only
/// when the user explicitly confirms; closing or cancelling issues no call.
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_label: String,
    busy_label: String,
    busy: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !busy { on_close.call(()) },
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if !busy {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body",
                    p { "{message}" }
                    p { class: "text-muted", "This action cannot be undone." }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "{busy_label}" } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StatCard(label: String, value: String, #[props(default)] accent: Option<String>) -> Element {
    let class = match &accent {
        Some(accent) => format!("stat-card stat-card-{accent}"),
        None => "stat-card".to_string(),
    };

    rsx! {
        div { class: "{class}",
            div { class: "stat-card-value", "{value}" }
            div { class: "stat-card-label", "{label}" }
        }
    }
}
