use dioxus::prelude::*;

mod views;

use views::{Attendance, Dashboard, Register, Settings, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/attendance")]
        Attendance {},
        #[route("/register")]
        Register {},
        #[route("/settings")]
        Settings {},
        // Unknown paths get a diagnostic page instead of silently rendering
        // nothing.
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page-header",
            h1 { class: "page-title", "No such page" }
            p { class: "page-subtitle", "There is no page at \"/{path}\"." }
        }
        Link { to: Route::Dashboard {}, class: "btn btn-primary", "Back to Dashboard" }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        client::init_tracing();
        dioxus::serve(|| async move {
            client::init()?;

            Ok(dioxus::server::router(App))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Rollcall" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// Structured error information for display
#[derive(Clone, Debug, Default)]
pub struct ErrorInfo {
    pub message: String,
    pub chain: Vec<String>,
}

impl ErrorInfo {
    /// Parse a ServerFnError to extract structured error info
    pub fn from_server_error(err: &ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError {
                message, details, ..
            } => {
                let chain = details
                    .as_ref()
                    .and_then(|details| details.get("chain"))
                    .and_then(|c| c.as_array())
                    .map(|arr| {
                        arr.iter()
                            .filter_map(|v| v.as_str().map(String::from))
                            .collect()
                    })
                    .unwrap_or_else(|| vec![message.clone()]);
                Self {
                    message: message.clone(),
                    chain,
                }
            }
            other => Self {
                message: other.to_string(),
                chain: vec![other.to_string()],
            },
        }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set(&mut self, error: impl Into<String>) {
        let msg = error.into();
        self.0.set(Some(ErrorInfo {
            message: msg.clone(),
            chain: vec![msg],
        }));
    }

    pub fn set_server_error(&mut self, err: &ServerFnError) {
        self.0.set(Some(ErrorInfo::from_server_error(err)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_context::<ErrorState>();
    let error = error_state.0.read();

    if let Some(err) = error.as_ref() {
        let has_chain = err.chain.len() > 1;

        rsx! {
            div { class: "error-banner",
                div { class: "error-banner-content",
                    div { class: "error-banner-header",
                        span { class: "error-banner-message", "{err.message}" }
                        div { class: "error-banner-actions",
                            button {
                                class: "error-banner-close",
                                onclick: move |_| error_state.clear(),
                                "×"
                            }
                        }
                    }
                    if has_chain {
                        div { class: "error-details",
                            div { class: "error-chain",
                                h4 { class: "error-section-title", "Error Chain" }
                                ol { class: "error-chain-list",
                                    for (i, msg) in err.chain.iter().enumerate() {
                                        li {
                                            key: "{i}",
                                            class: "error-chain-item",
                                            "{msg}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[component]
fn AppLayout() -> Element {
    use_context_provider(|| ErrorState(Signal::new(None)));

    rsx! {
        div { class: "app-layout",
            // Sidebar
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "Rollcall" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, "Dashboard" }
                    NavLink { to: Route::Users {}, "Users" }
                    NavLink { to: Route::Attendance {}, "Attendance" }
                    NavLink { to: Route::Register {}, "Register" }
                    NavLink { to: Route::Settings {}, "Settings" }
                }
                div { class: "sidebar-footer",
                    span { class: "sidebar-device", "Face-recognition attendance device" }
                }
            }
            // Main content
            main { class: "main-content",
                ErrorBanner {}
                Outlet::<Route> {}
            }
        }
    }
}
