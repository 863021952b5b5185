use crate::use_error;
use crate::views::components::ConfirmModal;
use dioxus::prelude::*;
use types::roster::{self, RosterFilter, User};

#[component]
pub fn Users() -> Element {
    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut load_seq = use_signal(|| 0u64);
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| RosterFilter::All);
    let mut delete_target = use_signal(|| None::<String>);
    let mut reset_target = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut error_state = use_error();

    let mut load = move || {
        let seq = *load_seq.peek() + 1;
        load_seq.set(seq);
        spawn(async move {
            loading.set(true);
            match api::list_users().await {
                Ok(u) => {
                    // A newer load superseded this one; drop the response.
                    if *load_seq.peek() != seq {
                        return;
                    }
                    users.set(u);
                }
                Err(e) => {
                    tracing::error!("failed to load users: {e}");
                    error_state.set_server_error(&e);
                }
            }
            if *load_seq.peek() == seq {
                loading.set(false);
            }
        });
    };

    use_effect(move || load());

    // The search and status filters derive from the snapshot; the snapshot
    // itself is never mutated and no refetch happens on filter changes.
    let filtered = use_memo(move || {
        roster::filter_users(&users.read(), &search.read(), *status_filter.read())
    });

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Users" }
                    p { class: "page-subtitle", "Everyone registered on the attendance device." }
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
                    r#type: "search",
                    placeholder: "Search by ID or name",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
                select {
                    class: "form-input",
                    onchange: move |e| status_filter.set(RosterFilter::from_value(&e.value())),
                    option { value: "all", "All users" }
                    option { value: "active", "Active" }
                    option { value: "dropped", "Dropped" }
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading users..." }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Name" }
                                    th { "Absences" }
                                    th { "Status" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for user in filtered.read().iter() {
                                    {
                                        let delete_id = user.id.clone();
                                        let reset_id = user.id.clone();
                                        rsx! {
                                            tr {
                                                td { class: "mono", "{user.id}" }
                                                td { "{user.name}" }
                                                td { "{user.absence_count}" }
                                                td { class: "{user.status_class()}",
                                                    "{user.status_label()}"
                                                }
                                                td { class: "row-actions",
                                                    // Reset only makes sense once the device
                                                    // has dropped the user.
                                                    if user.is_dropped {
                                                        button {
                                                            class: "btn btn-secondary btn-sm",
                                                            onclick: move |_| reset_target.set(Some(reset_id.clone())),
                                                            "Reset"
                                                        }
                                                    }
                                                    button {
                                                        class: "btn btn-danger btn-sm",
                                                        onclick: move |_| delete_target.set(Some(delete_id.clone())),
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                                if filtered.read().is_empty() {
                                    tr {
                                        td { colspan: 5, class: "empty-row", "No users found" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(id) = delete_target.read().clone() {
            ConfirmModal {
                title: "Delete User",
                message: "Are you sure you want to delete user {id}?",
                confirm_label: "Delete",
                busy_label: "Deleting...",
                busy: *busy.read(),
                on_close: move |_| delete_target.set(None),
                on_confirm: {
                    let id = id.clone();
                    move |_| {
                        let id = id.clone();
                        spawn(async move {
                            busy.set(true);
                            match api::delete_user(id).await {
                                Ok(()) => load(),
                                Err(e) => {
                                    tracing::error!("failed to delete user: {e}");
                                    error_state.set_server_error(&e);
                                }
                            }
                            busy.set(false);
                            delete_target.set(None);
                        });
                    }
                },
            }
        }

        if let Some(id) = reset_target.read().clone() {
            ConfirmModal {
                title: "Reset Absences",
                message: "Are you sure you want to reset absences for user {id}?",
                confirm_label: "Reset",
                busy_label: "Resetting...",
                busy: *busy.read(),
                on_close: move |_| reset_target.set(None),
                on_confirm: {
                    let id = id.clone();
                    move |_| {
                        let id = id.clone();
                        spawn(async move {
                            busy.set(true);
                            match api::reset_user_absences(id).await {
                                Ok(()) => load(),
                                Err(e) => {
                                    tracing::error!("failed to reset absences: {e}");
                                    error_state.set_server_error(&e);
                                }
                            }
                            busy.set(false);
                            reset_target.set(None);
                        });
                    }
                },
            }
        }
    }
}
