mod components;
mod coords;
mod pages;

use dioxus::prelude::*;
use parkmap_shared::MapProfile;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/illustrert")]
    Illustrated {},
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::park::ParkScreen { profile: MapProfile::photo_map() }
    }
}

#[component]
fn Illustrated() -> Element {
    rsx! {
        pages::park::ParkScreen { profile: MapProfile::illustrated_map() }
    }
}

const CSS: Asset = asset!("/assets/main.css");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}
