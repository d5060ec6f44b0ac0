use log::{debug, error};
use serde::Deserialize;

const EMBEDDED_SITE: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SiteContent {
    pub brand: String,
    pub contact_email: String,
    pub assets: Assets,
    pub nav_links: Vec<NavLink>,
    pub features: Vec<FeatureCard>,
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub marquee: Marquee,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Assets {
    pub hero_gif: String,
    pub laptop_gif: String,
    pub goggles_gif: String,
    pub arrow_down: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    /// Icon image URL.
    pub icon: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Marquee {
    pub text: String,
    pub repeat: usize,
}

impl SiteContent {
    /// Parses the copy bundled into the binary from `content/site.json`.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(EMBEDDED_SITE)
    }

    /// Like [`SiteContent::embedded`], but falls back to empty content so the
    /// page shell still renders.
    pub fn load_or_default() -> Self {
        match Self::embedded() {
            Ok(content) => {
                debug!(
                    "Loaded site content: {} faq entries, {} feature cards",
                    content.faq.len(),
                    content.features.len()
                );
                content
            }
            Err(err) => {
                error!("Failed to parse embedded site content: {}", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::embedded().expect("embedded site.json must parse");
        assert_eq!(content.brand, "Cilantro");
        assert_eq!(content.faq.len(), 6);
        assert_eq!(content.features.len(), 3);
        assert_eq!(content.marquee.repeat, 10);
    }

    #[test]
    fn every_record_is_filled_in() {
        let content = SiteContent::embedded().unwrap();
        for entry in &content.faq {
            assert!(!entry.question.is_empty());
            assert!(!entry.answer.is_empty());
        }
        for card in &content.features {
            assert!(!card.title.is_empty());
            assert!(card.icon.starts_with("https://"));
        }
    }

    #[test]
    fn overlay_links_point_at_page_anchors() {
        let content = SiteContent::embedded().unwrap();
        let hrefs: Vec<&str> = content.nav_links.iter().map(|l| l.href.as_str()).collect();
        assert!(hrefs.contains(&"#approach"));
        assert!(hrefs.contains(&"#cta"));
    }

    #[test]
    fn marquee_is_optional() {
        let json = r#"{
            "brand": "b", "contact_email": "e",
            "assets": {"hero_gif": "", "laptop_gif": "", "goggles_gif": "", "arrow_down": ""},
            "nav_links": [], "features": [], "faq": []
        }"#;
        let content: SiteContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.marquee, Marquee::default());
    }
}
