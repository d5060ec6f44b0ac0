use yew::prelude::*;

use crate::config;
use crate::hooks::use_in_view::use_in_view;
use crate::state::reveal::{AnimationKind, Reveal};
use crate::state::visibility::ObserveOptions;

#[derive(Properties, PartialEq)]
pub struct AnimateProps {
    #[prop_or_default]
    pub animation: AnimationKind,
    /// Transition delay in milliseconds.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or(config::DEFAULT_VISIBILITY_THRESHOLD)]
    pub threshold: f64,
    /// When false the animation replays each time the content re-enters the viewport.
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays an entrance animation the first time its content scrolls into view.
#[function_component(Animate)]
pub fn animate(props: &AnimateProps) -> Html {
    let node = use_node_ref();
    let mut options = ObserveOptions::default().with_threshold(props.threshold);
    if !props.once {
        options = options.repeating();
    }
    let in_view = use_in_view(node.clone(), options);
    let reveal = Reveal::new(props.animation, props.delay).active(in_view);

    html! {
        <div
            ref={node}
            class={classes!(reveal.class_names(), props.class.clone())}
            style={reveal.style()}
        >
            { for props.children.iter() }
        </div>
    }
}
