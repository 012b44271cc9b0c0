use dioxus::prelude::*;

use ui::dashboard::DashboardData;
use ui::views::{Dashboard, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One table load per page lifetime (the bundled table on wasm); views
    // read the handle from context.
    use_context_provider(DashboardData::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router wrapper so navbar links use the web `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        header { class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Pulseboard" }
                    span { class: "navbar__brand-subtitle", "cardiac records at a glance" }
                }
                nav { class: "navbar__links",
                    Link { class: "navbar__link", to: Route::Home {}, "Home" }
                    Link { class: "navbar__link", to: Route::Dashboard {}, "Dashboard" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
