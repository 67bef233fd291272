use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod particles {
    pub mod field;
    pub mod canvas;
    pub mod animation;
    pub mod component;
}
mod components {
    pub mod entrance;
    pub mod stat_counter;
}
mod sections {
    pub mod header;
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod advantages;
    pub mod portfolio;
    pub mod contact;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::Home,
    not_found::NotFound,
};


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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
