use dioxus::prelude::*;

/// Fixed marker in the middle of the screen. In compass mode it carries a
/// needle rotated toward the nearest location.
#[component]
pub fn UserMarker(compass_enabled: bool, direction: f64) -> Element {
    rsx! {
        div { class: "user-marker",
            div { class: "user-pulse" }
            div { class: "user-dot",
                if compass_enabled {
                    div {
                        class: "user-needle",
                        style: "transform: rotate({direction}deg);",
                        "▲"
                    }
                }
            }
        }
    }
}
