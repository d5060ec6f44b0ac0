use log::warn;
use yew::prelude::*;

use crate::hooks::subscription::listen;
use crate::state::scroll::ScrollState;

/// Whether the window is scrolled further than `threshold_px`.
#[hook]
pub fn use_scroll_past(threshold_px: f64) -> bool {
    let past = use_state(|| false);

    {
        let past = past.setter();
        use_effect_with_deps(
            move |&threshold_px| {
                let guard = web_sys::window().and_then(|window| {
                    let mut state = ScrollState::new(threshold_px);
                    let mut sync = {
                        let window = window.clone();
                        move || {
                            if let Ok(offset) = window.scroll_y() {
                                if state.update(offset).is_some() {
                                    past.set(state.past_threshold());
                                }
                            }
                        }
                    };
                    // Initial check, the page may be restored mid-scroll
                    sync();
                    listen(&window, "scroll", sync)
                        .map_err(|err| warn!("Could not listen for scroll: {:?}", err))
                        .ok()
                });
                move || drop(guard)
            },
            threshold_px,
        );
    }

    *past
}
