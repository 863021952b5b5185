use crate::use_error;
use crate::views::components::StatCard;
use dioxus::prelude::*;
use types::attendance::{self, AttendanceRecord, DayBucket, DayCounts};
use types::roster::{self, User};

#[component]
pub fn Dashboard() -> Element {
    let mut users = use_signal(Vec::<User>::new);
    let mut records = use_signal(Vec::<AttendanceRecord>::new);
    let mut loading = use_signal(|| true);
    let mut load_seq = use_signal(|| 0u64);
    let mut error_state = use_error();

    let mut load = move || {
        let seq = *load_seq.peek() + 1;
        load_seq.set(seq);
        spawn(async move {
            loading.set(true);

            let roster_snapshot = match api::list_users().await {
                Ok(u) => u,
                Err(e) => {
                    tracing::error!("failed to load users: {e}");
                    error_state.set_server_error(&e);
                    if *load_seq.peek() == seq {
                        loading.set(false);
                    }
                    return;
                }
            };

            // Starts only after the users fetch succeeded, so both snapshots
            // come from the same load cycle.
            let attendance_snapshot = match api::list_attendance().await {
                Ok(a) => a,
                Err(e) => {
                    tracing::error!("failed to load attendance: {e}");
                    error_state.set_server_error(&e);
                    if *load_seq.peek() == seq {
                        loading.set(false);
                    }
                    return;
                }
            };

            // A newer load superseded this one; drop the response.
            if *load_seq.peek() != seq {
                return;
            }

            users.set(roster_snapshot);
            records.set(attendance_snapshot);
            loading.set(false);
        });
    };

    use_effect(move || load());

    let today_records = use_memo(move || {
        let tz = attendance::local_tz();
        match DayBucket::today(&tz) {
            Ok(bucket) => attendance::filter_by_day(&records.read(), &bucket),
            Err(e) => {
                tracing::warn!("could not compute today's bucket: {e}");
                Vec::new()
            }
        }
    });
    let counts = use_memo(move || DayCounts::tally(&today_records.read()));
    let recent = use_memo(move || attendance::recent(&today_records.read(), 10));

    let total_users = users.read().len();
    let dropped_users = roster::dropped_count(&users.read());

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "Today's attendance at a glance." }
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

            div { class: "stat-grid",
                StatCard { label: "Total Users", value: "{total_users}" }
                StatCard { label: "Dropped", value: "{dropped_users}", accent: "dropped" }
                StatCard { label: "Present Today", value: "{counts.read().present}", accent: "present" }
                StatCard { label: "Late Today", value: "{counts.read().late}", accent: "late" }
                StatCard { label: "Absent Today", value: "{counts.read().absent}", accent: "absent" }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Recent Activity" }
                }
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Time" }
                                th { "User" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for record in recent.read().iter() {
                                {
                                    let time = attendance::format_time_of_day(
                                        record.timestamp,
                                        &attendance::local_tz(),
                                    );
                                    rsx! {
                                        tr {
                                            td { "{time}" }
                                            td { "{record.display_name()}" }
                                            td { class: "{record.status.css_class()}",
                                                "{record.status.label()}"
                                            }
                                        }
                                    }
                                }
                            }
                            if recent.read().is_empty() {
                                tr {
                                    td { colspan: 3, class: "empty-row", "No activity today" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
