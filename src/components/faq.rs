use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::animate::Animate;
use crate::config;
use crate::content::FaqEntry;
use crate::state::accordion::Accordion;
use crate::state::reveal::stagger;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    entry: FaqEntry,
    open: bool,
    icon: String,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                {&props.entry.question}
                <img src={props.icon.clone()} alt="" class="faq-icon" />
            </button>
            <div class="faq-answer">
                <p>{&props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
    /// Arrow icon shown next to each question.
    pub icon: String,
    #[prop_or(config::FAQ_STAGGER_MS)]
    pub stagger_ms: u32,
}

/// FAQ list where at most one answer is expanded.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_state(|| Accordion::new(props.entries.len()));

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| {
            let next = accordion.activate(index);
            debug!("FAQ open item: {:?}", next.open_index());
            accordion.set(next);
        })
    };

    html! {
        <div class="faq-list">
            {
                props.entries.iter().enumerate().map(|(i, entry)| html! {
                    <Animate key={i} delay={stagger(i, props.stagger_ms)}>
                        <FaqItem
                            index={i}
                            entry={entry.clone()}
                            open={accordion.is_open(i)}
                            icon={props.icon.clone()}
                            on_toggle={on_toggle.clone()}
                        />
                    </Animate>
                }).collect::<Html>()
            }
        </div>
    }
}
