use crate::use_error;
use crate::views::components::ConfirmModal;
use dioxus::prelude::*;
use types::settings::{self, Settings as DeviceSettings};

#[component]
pub fn Settings() -> Element {
    let mut start_time = use_signal(|| "08:00".to_string());
    let mut late_threshold = use_signal(|| "15".to_string());
    let mut absent_threshold = use_signal(|| "60".to_string());
    let mut max_absences = use_signal(|| "3".to_string());
    let mut saving = use_signal(|| false);
    let mut message = use_signal(|| None::<Result<String, String>>);
    let mut show_reset_confirm = use_signal(|| false);
    let mut resetting = use_signal(|| false);
    let mut error_state = use_error();

    let save = move |_: MouseEvent| {
        // All fields are required and validated before any network call.
        let fields = [
            start_time.read().clone(),
            late_threshold.read().clone(),
            absent_threshold.read().clone(),
            max_absences.read().clone(),
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            message.set(Some(Err("Please fill all fields".to_string())));
            return;
        }

        let Some((hour, minute)) = settings::parse_start_time(fields[0].trim()) else {
            message.set(Some(Err(
                "Attendance start must be a valid HH:MM time".to_string()
            )));
            return;
        };
        let (Ok(late), Ok(absent), Ok(max)) = (
            fields[1].trim().parse::<u32>(),
            fields[2].trim().parse::<u32>(),
            fields[3].trim().parse::<u32>(),
        ) else {
            message.set(Some(Err(
                "Thresholds and max absences must be whole numbers".to_string(),
            )));
            return;
        };

        let device_settings = DeviceSettings {
            attendance_start_hour: hour,
            attendance_start_minute: minute,
            late_threshold_minutes: late,
            absent_threshold_minutes: absent,
            max_absences_before_drop: max,
        };

        spawn(async move {
            saving.set(true);
            match api::save_settings(device_settings).await {
                Ok(()) => {
                    message.set(Some(Ok("Settings saved successfully".to_string())));
                }
                Err(e) => {
                    tracing::error!("failed to save settings: {e}");
                    error_state.set_server_error(&e);
                    message.set(Some(Err(
                        "Failed to save settings. Please try again.".to_string()
                    )));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Settings" }
                p { class: "page-subtitle", "Attendance policy applied by the device." }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Attendance Policy" }
                }
                div { class: "card-body",
                    if let Some(result) = message.read().as_ref() {
                        {
                            let (class, text) = match result {
                                Ok(text) => ("alert alert-success", text),
                                Err(text) => ("alert alert-error", text),
                            };
                            rsx! {
                                div { class: "{class}", "{text}" }
                            }
                        }
                    }

                    div { class: "form-group",
                        label { class: "form-label", r#for: "start_time", "Attendance start" }
                        input {
                            id: "start_time",
                            class: "form-input",
                            r#type: "time",
                            disabled: *saving.read(),
                            value: "{start_time}",
                            onchange: move |e| start_time.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "late_threshold", "Late threshold (minutes)" }
                        input {
                            id: "late_threshold",
                            class: "form-input",
                            r#type: "number",
                            min: "0",
                            disabled: *saving.read(),
                            value: "{late_threshold}",
                            oninput: move |e| late_threshold.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "absent_threshold", "Absent threshold (minutes)" }
                        input {
                            id: "absent_threshold",
                            class: "form-input",
                            r#type: "number",
                            min: "0",
                            disabled: *saving.read(),
                            value: "{absent_threshold}",
                            oninput: move |e| absent_threshold.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "max_absences", "Max absences before drop" }
                        input {
                            id: "max_absences",
                            class: "form-input",
                            r#type: "number",
                            min: "0",
                            disabled: *saving.read(),
                            value: "{max_absences}",
                            oninput: move |e| max_absences.set(e.value()),
                        }
                    }

                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            disabled: *saving.read(),
                            onclick: save,
                            if *saving.read() { "Saving..." } else { "Save Settings" }
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title section-header-danger", "Danger Zone" }
                }
                div { class: "card-body",
                    p { class: "text-muted",
                        "Resetting wipes every user and attendance record on the device."
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| show_reset_confirm.set(true),
                        "Reset System"
                    }
                }
            }
        }

        if *show_reset_confirm.read() {
            ConfirmModal {
                title: "Reset System",
                message: "Are you sure you want to reset the entire system? This will delete all users and attendance records.",
                confirm_label: "Reset",
                busy_label: "Resetting...",
                busy: *resetting.read(),
                on_close: move |_| show_reset_confirm.set(false),
                on_confirm: move |_| {
                    spawn(async move {
                        resetting.set(true);
                        match api::reset_system().await {
                            Ok(()) => {
                                message.set(Some(Ok("System reset successfully".to_string())));
                            }
                            Err(e) => {
                                tracing::error!("failed to reset system: {e}");
                                error_state.set_server_error(&e);
                            }
                        }
                        resetting.set(false);
                        show_reset_confirm.set(false);
                    });
                },
            }
        }
    }
}
