use crate::use_error;
use dioxus::prelude::*;
use types::non_empty_trimmed;

const CAMERA_IDLE: &str = "Camera feed not available";

#[derive(Clone, Copy, PartialEq)]
enum MessageKind {
    Success,
    Error,
}

#[component]
pub fn Register() -> Element {
    let mut user_id = use_signal(String::new);
    let mut user_name = use_signal(String::new);
    let mut camera_status = use_signal(|| CAMERA_IDLE.to_string());
    let mut captured = use_signal(|| false);
    let mut capturing = use_signal(|| false);
    let mut registering = use_signal(|| false);
    let mut message = use_signal(|| None::<(MessageKind, String)>);
    let mut error_state = use_error();

    let capture = move |_: MouseEvent| {
        // Validate before any network call.
        let Some(id) = non_empty_trimmed(&user_id.read()).map(str::to_string) else {
            message.set(Some((
                MessageKind::Error,
                "Please enter a user ID first".to_string(),
            )));
            return;
        };

        message.set(None);
        camera_status.set("Capturing face... Please look at the camera.".to_string());
        spawn(async move {
            capturing.set(true);
            match api::capture_face(id).await {
                Ok(()) => {
                    camera_status
                        .set("Face captured successfully. You can now register the user.".to_string());
                    captured.set(true);
                }
                Err(e) => {
                    tracing::error!("failed to capture face: {e}");
                    camera_status.set("Failed to capture face. Please try again.".to_string());
                }
            }
            capturing.set(false);
        });
    };

    let register = move |_: MouseEvent| {
        let Some(id) = non_empty_trimmed(&user_id.read()).map(str::to_string) else {
            message.set(Some((MessageKind::Error, "Please enter a user ID".to_string())));
            return;
        };
        let Some(name) = non_empty_trimmed(&user_name.read()).map(str::to_string) else {
            message.set(Some((MessageKind::Error, "Please enter a name".to_string())));
            return;
        };

        spawn(async move {
            registering.set(true);
            match api::register_user(id, name.clone()).await {
                Ok(()) => {
                    message.set(Some((
                        MessageKind::Success,
                        format!("User {name} registered successfully!"),
                    )));
                    user_id.set(String::new());
                    user_name.set(String::new());
                    captured.set(false);
                    camera_status.set(CAMERA_IDLE.to_string());
                }
                Err(e) => {
                    tracing::error!("failed to register user: {e}");
                    error_state.set_server_error(&e);
                    message.set(Some((
                        MessageKind::Error,
                        "Failed to register user. Please try again.".to_string(),
                    )));
                }
            }
            registering.set(false);
        });
    };

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Register User" }
                p { class: "page-subtitle", "Capture a face on the device, then register the user." }
            }

            div { class: "card",
                div { class: "card-body",
                    if let Some((kind, text)) = message.read().as_ref() {
                        div {
                            class: if *kind == MessageKind::Success { "alert alert-success" } else { "alert alert-error" },
                            "{text}"
                        }
                    }

                    div { class: "form-group",
                        label { class: "form-label", r#for: "user_id", "User ID *" }
                        input {
                            id: "user_id",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. 2021-00123",
                            disabled: *registering.read(),
                            value: "{user_id}",
                            oninput: move |e| user_id.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "user_name", "Name *" }
                        input {
                            id: "user_name",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. Juan dela Cruz",
                            disabled: *registering.read(),
                            value: "{user_name}",
                            oninput: move |e| user_name.set(e.value()),
                        }
                    }

                    div { class: "camera-status", "{camera_status}" }

                    div { class: "form-actions",
                        button {
                            class: "btn btn-secondary",
                            disabled: *capturing.read(),
                            onclick: capture,
                            if *capturing.read() { "Capturing..." } else { "Capture Face" }
                        }
                        button {
                            class: "btn btn-primary",
                            // Registration is gated on a successful capture.
                            disabled: !*captured.read() || *registering.read(),
                            onclick: register,
                            if *registering.read() { "Registering..." } else { "Register" }
                        }
                    }
                }
            }
        }
    }
}
