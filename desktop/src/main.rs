#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::dashboard::DashboardData;
use ui::views::{Dashboard, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// /assets needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    init_tracing();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pulseboard desktop starting");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Pulseboard – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_tracing();
    LaunchBuilder::server().launch(App);
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[component]
fn App() -> Element {
    // One table load per process lifetime; every view reads the handle from
    // context. A failed load still mounts the router so the error page can
    // say why.
    use_context_provider(DashboardData::load);

    rsx! {
        // Always inline embedded CSS (no external file dependency for
        // desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

/// A desktop-specific Router wrapper so navbar links use the desktop
/// `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
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
