use crate::use_error;
use dioxus::prelude::*;
use jiff::civil::Date;
use jiff::Timestamp;
use types::attendance::{self, AttendanceRecord, DayBucket, StatusFilter};

fn today_value() -> String {
    Timestamp::now()
        .to_zoned(attendance::local_tz())
        .date()
        .to_string()
}

#[component]
pub fn Attendance() -> Element {
    let mut records = use_signal(Vec::<AttendanceRecord>::new);
    let mut loading = use_signal(|| true);
    let mut load_seq = use_signal(|| 0u64);
    let mut date = use_signal(today_value);
    let mut status_filter = use_signal(|| StatusFilter::All);
    let mut error_state = use_error();

    let mut load = move || {
        let seq = *load_seq.peek() + 1;
        load_seq.set(seq);
        spawn(async move {
            loading.set(true);
            match api::list_attendance().await {
                Ok(a) => {
                    // A newer load superseded this one; drop the response.
                    if *load_seq.peek() != seq {
                        return;
                    }
                    records.set(a);
                }
                Err(e) => {
                    tracing::error!("failed to load attendance: {e}");
                    error_state.set_server_error(&e);
                }
            }
            if *load_seq.peek() == seq {
                loading.set(false);
            }
        });
    };

    // Refetch when the date changes (status changes only re-derive below).
    use_effect(move || {
        let _ = date.read();
        load();
    });

    let displayed = use_memo(move || {
        let snapshot = records.read();
        let narrowed = match date.read().parse::<Date>() {
            Ok(day) => match DayBucket::for_date(day, &attendance::local_tz()) {
                Ok(bucket) => attendance::filter_by_day(&snapshot, &bucket),
                Err(e) => {
                    tracing::warn!("could not compute day bucket: {e}");
                    snapshot.clone()
                }
            },
            // No (or unparseable) date filter: show the whole snapshot.
            Err(_) => snapshot.clone(),
        };
        let mut filtered = attendance::filter_by_status(&narrowed, *status_filter.read());
        attendance::sort_newest_first(&mut filtered);
        filtered
    });

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Attendance" }
                    p { class: "page-subtitle", "Check-in log for one calendar day." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-secondary",
                        disabled: *loading.read(),
                        onclick: move |_| load(),
                        if *loading.read() { "Loading..." } else { "Refresh" }
                    }
                }
            }

            div { class: "filter-bar",
                input {
                    class: "form-input",
                    r#type: "date",
                    value: "{date}",
                    onchange: move |e| date.set(e.value()),
                }
                select {
                    class: "form-input",
                    onchange: move |e| status_filter.set(StatusFilter::from_value(&e.value())),
                    option { value: "all", "All statuses" }
                    option { value: "present", "Present" }
                    option { value: "late", "Late" }
                    option { value: "absent", "Absent" }
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading attendance..." }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Time" }
                                    th { "User ID" }
                                    th { "Name" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for record in displayed.read().iter() {
                                    {
                                        let time = attendance::format_time_of_day(
                                            record.timestamp,
                                            &attendance::local_tz(),
                                        );
                                        let name = record.name.as_deref().unwrap_or("Unknown");
                                        rsx! {
                                            tr {
                                                td { "{time}" }
                                                td { class: "mono", "{record.user_id}" }
                                                td { "{name}" }
                                                td { class: "{record.status.css_class()}",
                                                    "{record.status.label()}"
                                                }
                                            }
                                        }
                                    }
                                }
                                if displayed.read().is_empty() {
                                    tr {
                                        td { colspan: 4, class: "empty-row",
                                            "No attendance records found for the selected date"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
