use dioxus::prelude::*;
use parkmap_shared::{GuidanceResult, MapProfile, ParkView};

use crate::components::category_selector::CategorySelector;
use crate::components::distance_bubble::DistanceBubble;
use crate::components::map_view::MapView;
use crate::components::user_marker::UserMarker;
use crate::Route;

#[component]
pub fn ParkScreen(profile: MapProfile) -> Element {
    // Readouts pushed by the view after every relevant change
    let mut guidance = use_signal(GuidanceResult::default);

    let mut view = use_signal(move || {
        let mut view = ParkView::new(profile);
        view.subscribe(move |g| guidance.set(g.clone()));
        view
    });

    let state = view.read();
    let title = state.profile().name.clone();
    let compass_enabled = state.compass_enabled();
    let has_category = state.selected_category().is_some();
    let selected = state.selected_location().map(|loc| loc.name.clone());
    let current = guidance.read().clone();
    let target_name = current
        .user_target
        .as_deref()
        .and_then(|id| state.profile().locations.get(id))
        .map(|loc| loc.name.clone())
        .unwrap_or_default();
    let offscreen_hint = has_category && !state.highlighted_visible();
    drop(state);

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "{title}" }
                nav { class: "map-switch",
                    Link { to: Route::Home {}, "Kart" }
                    Link { to: Route::Illustrated {}, "Illustrert" }
                }
            }

            CategorySelector { view }

            div { class: "map-wrapper",
                MapView { view }
                UserMarker { compass_enabled, direction: current.bearing_degrees }

                if has_category {
                    DistanceBubble {
                        guidance: current.clone(),
                        compass_enabled,
                        target_name,
                    }
                }

                if offscreen_hint {
                    div { class: "offscreen-hint", "Ingen treff i utsnittet, dra i kartet" }
                }

                div { class: "map-controls",
                    button {
                        class: "control recenter",
                        title: "Sentrer på meg",
                        onclick: move |_| view.write().recenter(),
                        "◎"
                    }
                    button {
                        class: if compass_enabled { "control compass active" } else { "control compass" },
                        title: "Kompass",
                        onclick: move |_| view.write().toggle_compass(),
                        "🧭"
                    }
                }
            }

            if let Some(name) = selected {
                div { class: "selection-panel",
                    span { "{name}" }
                    button {
                        class: "close",
                        onclick: move |_| view.write().select_location(None),
                        "✕"
                    }
                }
            }
        }
    }
}
