use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod state {
    pub mod accordion;
    pub mod lifecycle;
    pub mod menu;
    pub mod reveal;
    pub mod scroll;
    pub mod visibility;
}
mod hooks {
    pub mod subscription;
    pub mod use_in_view;
    pub mod use_scroll_past;
}
mod components {
    pub mod animate;
    pub mod faq;
    pub mod icons;
    pub mod navbar;
}
mod pages {
    pub mod landing;
}

use components::navbar::Navbar;
use content::SiteContent;
use pages::landing::Landing;

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
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        // Single page site, anything else goes back home
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    let content: Rc<SiteContent> = use_memo(|_| SiteContent::load_or_default(), ());

    html! {
        <ContextProvider<Rc<SiteContent>> context={content}>
            <BrowserRouter>
                <Navbar />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
