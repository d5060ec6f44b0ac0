use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::hooks::subscription::observe_visibility;
use crate::state::visibility::ObserveOptions;

/// True once the element behind `node` has been seen in the viewport.
///
/// If `node` is never attached nothing is observed and this stays false.
#[hook]
pub fn use_in_view(node: NodeRef, options: ObserveOptions) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let guard = node.cast::<Element>().and_then(|element| {
                    observe_visibility(&element, *options, move |visible| in_view.set(visible))
                        .map_err(|err| warn!("Could not observe element visibility: {:?}", err))
                        .ok()
                });
                move || drop(guard)
            },
            (node, options),
        );
    }

    *in_view
}
