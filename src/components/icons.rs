use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(28)]
    pub height: u32,
    pub brand: String,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <svg height={props.height.to_string()} viewBox="0 0 180 32" fill="none" xmlns="http://www.w3.org/2000/svg">
            <rect x="0" y="4" width="24" height="24" rx="6" fill="#ff6b00" />
            <rect x="5" y="9" width="6" height="6" rx="1.5" fill="#fff" />
            <rect x="13" y="9" width="6" height="6" rx="1.5" fill="#fff" />
            <rect x="5" y="17" width="6" height="6" rx="1.5" fill="#fff" />
            <rect x="13" y="17" width="6" height="6" rx="1.5" fill="#fff" />
            <text x="32" y="24" font-family="Inter, sans-serif" font-weight="700" font-size="22" fill="#fff">
                {&props.brand}
            </text>
        </svg>
    }
}

#[function_component(BrandIcon)]
pub fn brand_icon() -> Html {
    html! {
        <svg width="48" height="48" viewBox="0 0 48 48" fill="none" xmlns="http://www.w3.org/2000/svg">
            <rect width="48" height="48" rx="12" fill="#ff6b00" />
            <rect x="8" y="8" width="13" height="13" rx="3" fill="#fff" />
            <rect x="27" y="8" width="13" height="13" rx="3" fill="#fff" />
            <rect x="8" y="27" width="13" height="13" rx="3" fill="#fff" />
            <rect x="27" y="27" width="13" height="13" rx="3" fill="#fff" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArrowProps {
    #[prop_or(14)]
    pub size: u32,
}

#[function_component(ArrowUpRight)]
pub fn arrow_up_right(props: &ArrowProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg width={size.clone()} height={size} viewBox="0 0 14 14" fill="none" class="arrow">
            <path d="M1 13L13 1M13 1H3M13 1V11" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}
