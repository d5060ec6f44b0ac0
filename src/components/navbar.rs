use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::Logo;
use crate::config;
use crate::content::SiteContent;
use crate::hooks::use_scroll_past::use_scroll_past;
use crate::state::menu::Menu;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let scrolled = use_scroll_past(config::NAVBAR_SCROLL_THRESHOLD_PX);
    let menu = use_state(Menu::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.toggled());
        })
    };

    // Links keep their default anchor navigation, we only close the overlay.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.navigated());
        })
    };

    html! {
        <>
            <nav class={classes!("navbar", scrolled.then(|| "scrolled"))}>
                <div class="container">
                    <a href="/" class="logo-link">
                        <Logo brand={content.brand.clone()} />
                    </a>
                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label="Toggle menu"
                        aria-expanded={menu.is_open().to_string()}
                    >
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            <div class={classes!("nav-overlay", menu.is_open().then(|| "open"))}>
                <div class="nav-overlay-links">
                    {
                        content.nav_links.iter().map(|link| html! {
                            <a href={link.href.clone()} onclick={close_menu.clone()}>
                                {&link.label}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </>
    }
}
