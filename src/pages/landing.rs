use std::rc::Rc;

use chrono::Datelike;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::animate::Animate;
use crate::components::faq::FaqList;
use crate::components::icons::{ArrowUpRight, BrandIcon, Logo};
use crate::config;
use crate::content::SiteContent;
use crate::state::reveal::{stagger, AnimationKind, Reveal};

#[derive(Properties, PartialEq)]
struct SectionProps {
    content: Rc<SiteContent>,
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    // The hero animates on load, not on scroll.
    let mounted = use_state(|| false);
    {
        let mounted = mounted.setter();
        use_effect_with_deps(
            move |_| {
                // Next tick, so the hidden frame is painted before the transition starts
                let timeout = Timeout::new(0, move || mounted.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let statue = Reveal::new(AnimationKind::ScaleIn, 0).active(*mounted);
    let headline = Reveal::new(AnimationKind::FadeUp, config::HERO_HEADLINE_DELAY_MS).active(*mounted);
    let tagline = Reveal::new(AnimationKind::FadeUp, config::HERO_TAGLINE_DELAY_MS).active(*mounted);

    html! {
        <section class="hero-section">
            <div class="hero-image-wrapper">
                <img
                    src={props.content.assets.hero_gif.clone()}
                    alt="Greek statue holding a phone"
                    class={classes!("hero-statue", statue.class_names())}
                />
                <h1 class={classes!("hero-headline", headline.class_names())} style={headline.style()}>
                    {"Disrupt yourself."}
                </h1>
            </div>
            <div class={classes!("hero-bottom", tagline.class_names())} style={tagline.style()}>
                <div class="container">
                    <div class="hero-tagline">
                        <h2>{"Your "}<span class="accent">{"AI partner."}</span></h2>
                        <p>{"We set and execute your AI strategy at startup speed."}</p>
                    </div>
                    <div class="hero-line">
                        <div class="hero-line-inner"></div>
                    </div>
                    <a href="#approach" class="btn-learn-more">
                        {"Learn more "}<ArrowUpRight />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Approach)]
fn approach(props: &SectionProps) -> Html {
    html! {
        <section class="hww-section" id="approach">
            <div class="container">
                <div class="hww-label">{"OUR APPROACH"}</div>
                <div class="hww-grid">
                    <div class="hww-left">
                        <Animate>
                            <h2 class="hww-heading">
                                <span class="hww-accent">{&props.content.brand}</span>
                                {" helps you shift from AI-absent to AI-native."}
                            </h2>
                        </Animate>
                        <Animate delay={150}>
                            <BrandIcon />
                        </Animate>
                    </div>
                    <div class="hww-right">
                        {
                            props.content.features.iter().enumerate().map(|(i, card)| html! {
                                <Animate key={i} delay={stagger(i, config::CARD_STAGGER_MS)}>
                                    <div class="hww-card">
                                        <div class="hww-card-content">
                                            <h3 class="hww-title">{&card.title}</h3>
                                            <p class="hww-desc">{&card.description}</p>
                                            <span class="hww-link">{"Learn more "}<ArrowUpRight /></span>
                                        </div>
                                        <div class="hww-card-icon">
                                            <img src={card.icon.clone()} alt="" class="hww-icon" />
                                        </div>
                                    </div>
                                </Animate>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Disruption)]
fn disruption() -> Html {
    html! {
        <section class="disruption-section">
            <div class="container">
                <div class="disruption-content">
                    <Animate>
                        <h2 class="disruption-heading">
                            {"You have a choice. "}
                            <span class="disruption-pixel">{"Disrupt yourself."}</span>
                            <br />
                            <span class="disruption-accent">{"Or be disrupted by others."}</span>
                        </h2>
                    </Animate>
                    <Animate delay={150}>
                        <p class="disruption-body">
                            {"AI isn't coming. it's here. The companies that win the next decade will be the ones that transform now. We don't care about today. We care about the next decade. And helping you win it."}
                        </p>
                    </Animate>
                    <Animate delay={300}>
                        <a href="#cta" class="btn-get-started">{"Get started"}</a>
                    </Animate>
                </div>
            </div>
        </section>
    }
}

#[function_component(NotScary)]
fn not_scary(props: &SectionProps) -> Html {
    html! {
        <section class="scary-section">
            <div class="scary-grid-bg"></div>
            <div class="scary-layout">
                <Animate animation={AnimationKind::ScaleIn}>
                    <div class="scary-image">
                        <img src={props.content.assets.goggles_gif.clone()} alt="Statue with VR headset" />
                    </div>
                </Animate>
                <Animate delay={200}>
                    <div class="scary-text">
                        <h2>{"AI isn't scary. "}<span class="scary-pixel">{"Ignoring it is."}</span></h2>
                    </div>
                </Animate>
            </div>
        </section>
    }
}

#[function_component(MarqueeBand)]
fn marquee_band(props: &SectionProps) -> Html {
    let marquee = &props.content.marquee;
    html! {
        <Animate animation={AnimationKind::FadeIn}>
            <section class="marquee-section">
                <div class="marquee-track">
                    {
                        (0..marquee.repeat).map(|i| html! {
                            <span key={i} class="marquee-text">
                                {&marquee.text}{" "}<span class="dot"></span>
                            </span>
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </Animate>
    }
}

#[function_component(Questions)]
fn questions(props: &SectionProps) -> Html {
    html! {
        <section class="faq-section">
            <div class="container">
                <Animate>
                    <h2 class="faq-heading">{"Questions? We have answers"}</h2>
                </Animate>
                <FaqList
                    entries={props.content.faq.clone()}
                    icon={props.content.assets.arrow_down.clone()}
                />
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action(props: &SectionProps) -> Html {
    html! {
        <section class="cta-section" id="cta">
            <div class="container">
                <div class="cta-top">
                    <Animate animation={AnimationKind::ScaleIn}>
                        <BrandIcon />
                    </Animate>
                    <Animate delay={100}>
                        <h2 class="cta-heading">{"Stay on the right side of history."}</h2>
                    </Animate>
                    <Animate delay={200}>
                        <a href="#" class="btn-cta">
                            {"Get Started "}<ArrowUpRight size={16} />
                        </a>
                    </Animate>
                </div>
            </div>
            <Animate animation={AnimationKind::ScaleIn} delay={200}>
                <div class="cta-image-wrap">
                    <img src={props.content.assets.laptop_gif.clone()} alt="People working with AI" class="cta-image" />
                </div>
            </Animate>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let year = chrono::Local::now().year();
    let email = &props.content.contact_email;

    html! {
        <footer class="footer">
            <div class="container">
                <Animate>
                    <div class="footer-inner">
                        <div class="footer-left">
                            <a href="/">
                                <Logo height={24} brand={props.content.brand.clone()} />
                            </a>
                            <span class="footer-copy">
                                {format!("© {} {}. All rights reserved.", year, props.content.brand)}
                            </span>
                        </div>
                        <div class="footer-right">
                            <a href={format!("mailto:{}", email)} class="footer-email">{email}</a>
                        </div>
                    </div>
                </Animate>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();

    html! {
        <div class="landing-page">
            <Hero content={content.clone()} />
            <Approach content={content.clone()} />
            <Disruption />
            <NotScary content={content.clone()} />
            <MarqueeBand content={content.clone()} />
            <Questions content={content.clone()} />
            <CallToAction content={content.clone()} />
            <Footer content={content} />

            <style>
                {r#"
                .anim {
                    opacity: 0;
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .anim.fade-up {
                    transform: translateY(40px);
                }

                .anim.scale-in {
                    transform: scale(0.92);
                }

                .anim.in-view {
                    opacity: 1;
                    transform: none;
                }

                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 10;
                    background: transparent;
                    transition: background 0.3s ease;
                }

                .navbar.scrolled {
                    background: rgba(10, 10, 10, 0.9);
                    backdrop-filter: blur(10px);
                }

                .nav-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 9;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }

                .nav-overlay.open {
                    opacity: 1;
                    pointer-events: auto;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                }

                .faq-icon {
                    transition: transform 0.3s ease;
                }

                .faq-item.open .faq-icon {
                    transform: rotate(180deg);
                }

                .marquee-track {
                    display: flex;
                    white-space: nowrap;
                    animation: marquee 30s linear infinite;
                }

                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </div>
    }
}
