use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod browser;
mod config;
mod theme;
mod interactions {
    pub mod forms;
    pub mod header;
    pub mod intro;
    pub mod lightbox;
    pub mod nav_menu;
    pub mod reveal;
    pub mod timers;
}
mod components {
    pub mod forms;
    pub mod intro_overlay;
    pub mod lightbox;
    pub mod media;
    pub mod nav;
    pub mod reveal;
    pub mod sections;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let base_path = config::get_base_path();
    let basename = (!base_path.is_empty()).then(|| AttrValue::from(base_path));

    html! {
        <BrowserRouter {basename}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Networkof.One site (base path {:?})", config::get_base_path());
    yew::Renderer::<App>::new().render();
}
