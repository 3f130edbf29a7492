use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use parkmap_shared::models::{Location, MarkerState};
use parkmap_shared::{ParkView, Point};

use crate::components::map_marker::{EntranceMarker, MapMarker};
use crate::coords;

const MAP_CONTAINER_ID: &str = "park-map-container";

/// Measure the container and hand the size to the view.
fn measure(view: &mut Signal<ParkView>) {
    if let Some((w, h)) = coords::container_size(MAP_CONTAINER_ID) {
        let stale = view.peek().viewport().viewport_size().map(|s| (s.width, s.height)) != Some((w, h));
        if stale {
            view.write().measure_viewport(w, h);
        }
    }
}

fn touch_points(evt: &Event<TouchData>) -> Vec<Point> {
    evt.data()
        .touches()
        .iter()
        .filter_map(|t| {
            let c = t.client_coordinates();
            coords::client_to_container_point(c.x, c.y, MAP_CONTAINER_ID)
        })
        .collect()
}

#[component]
pub fn MapView(view: Signal<ParkView>) -> Element {
    let mut view = view;

    // Layout size is only known once the container is in the DOM.
    use_effect(move || {
        measure(&mut view);
    });

    let state = view.read();
    let map_size = state.viewport().map_size();
    let layer_style = format!(
        "{} width: {}px; height: {}px;",
        coords::translate_style(state.offset()),
        map_size.width,
        map_size.height
    );
    let container_class = if state.is_dragging() {
        "map-container dragging"
    } else {
        "map-container"
    };
    let entrance = state.profile().entrance;
    let image = state.profile().image.clone();
    let markers: Vec<(Location, MarkerState)> = state
        .marker_states()
        .filter(|(_, s)| !s.hidden)
        .map(|(loc, s)| (loc.clone(), s))
        .collect();
    drop(state);

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "{container_class}",

            onmousedown: move |evt: Event<MouseData>| {
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                measure(&mut view);
                let client = evt.client_coordinates();
                if let Some(p) = coords::client_to_container_point(client.x, client.y, MAP_CONTAINER_ID) {
                    view.write().pointer_down(p);
                }
            },

            onmousemove: move |evt: Event<MouseData>| {
                if !view.read().is_dragging() {
                    return;
                }
                let client = evt.client_coordinates();
                if let Some(p) = coords::client_to_container_point(client.x, client.y, MAP_CONTAINER_ID) {
                    view.write().pointer_move(p);
                }
            },

            onmouseup: move |_| {
                view.write().pointer_up();
            },

            onmouseleave: move |_| {
                view.write().pointer_leave();
            },

            ontouchstart: move |evt: Event<TouchData>| {
                evt.prevent_default();
                measure(&mut view);
                let touches = touch_points(&evt);
                view.write().touch_start(&touches);
            },

            ontouchmove: move |evt: Event<TouchData>| {
                evt.prevent_default();
                let touches = touch_points(&evt);
                view.write().touch_move(&touches);
            },

            ontouchend: move |evt: Event<TouchData>| {
                evt.prevent_default();
                // Any lifted finger ends the gesture; a remaining one must not take over.
                view.write().touch_end();
            },

            ontouchcancel: move |_evt: Event<TouchData>| {
                view.write().touch_cancel();
            },

            div {
                class: "map-layer",
                style: "{layer_style}",
                if let Some(src) = image {
                    img { src: "{src}", draggable: "false", class: "map-image" }
                }

                if let Some(pos) = entrance {
                    EntranceMarker { x: pos.x, y: pos.y }
                }

                for (loc, marker) in markers {
                    MapMarker {
                        key: "{loc.id}",
                        location: loc.clone(),
                        state: marker,
                        on_select: move |id: String| {
                            view.write().select_location(Some(&id));
                        },
                    }
                }
            }
        }
    }
}
