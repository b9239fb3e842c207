//! Top app bar with route links, theme toggle and the mobile drawer.

use crate::Route;
use dioxus::prelude::*;
use wgi_ui::state::AppState;

#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let theme = state.theme();
    let current = use_route::<Route>();
    let mut drawer_open = use_signal(|| false);
    let dark = (state.dark_mode)();
    let toggle_icon = if dark { "☀️" } else { "🌙" };
    let toggle_title = if dark { "Mode terang" } else { "Mode gelap" };

    let links: Vec<(Route, &'static str, String)> = Route::nav_items()
        .into_iter()
        .map(|(route, label)| {
            let style = if route == current {
                "padding: 8px 14px; border-radius: 8px; text-decoration: none; color: #ffffff; background: rgba(255, 255, 255, 0.2); font-weight: 600;".to_string()
            } else {
                "padding: 8px 14px; border-radius: 8px; text-decoration: none; color: rgba(255, 255, 255, 0.85);".to_string()
            };
            (route, label, style)
        })
        .collect();
    let drawer_links = links.clone();

    rsx! {
        header {
            style: "position: sticky; top: 0; z-index: 1100; background: {theme.primary_gradient}; box-shadow: 0 2px 10px rgba(0, 0, 0, 0.15);",
            div {
                style: "max-width: 1200px; margin: 0 auto; padding: 10px 16px; display: flex; align-items: center; justify-content: space-between;",
                Link {
                    to: Route::Home {},
                    style: "color: #ffffff; text-decoration: none; font-size: 20px; font-weight: 700;",
                    "🗺️ WebGIS Indonesia"
                }
                nav {
                    class: "wgi-nav-links",
                    for (route, label, style) in links {
                        Link { to: route, style: "{style}", "{label}" }
                    }
                }
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    button {
                        title: "{toggle_title}",
                        style: "border: none; background: rgba(255, 255, 255, 0.15); border-radius: 50%; width: 36px; height: 36px; cursor: pointer;",
                        onclick: move |_| state.toggle_dark_mode(),
                        "{toggle_icon}"
                    }
                    button {
                        class: "wgi-menu-button",
                        style: "border: none; background: transparent; color: #ffffff; font-size: 22px; cursor: pointer;",
                        onclick: move |_| drawer_open.toggle(),
                        "☰"
                    }
                }
            }
            if drawer_open() {
                nav {
                    style: "display: flex; flex-direction: column; padding: 8px 16px 16px 16px; gap: 4px;",
                    for (route, label, style) in drawer_links {
                        Link {
                            to: route,
                            style: "{style}",
                            onclick: move |_| drawer_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
