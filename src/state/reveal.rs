#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationKind {
    #[default]
    FadeUp,
    FadeIn,
    ScaleIn,
}

impl AnimationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            AnimationKind::FadeUp => "fade-up",
            AnimationKind::FadeIn => "fade-in",
            AnimationKind::ScaleIn => "scale-in",
        }
    }
}

/// Render-side state of an entrance animation, derived from a visibility flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub kind: AnimationKind,
    pub delay_ms: u32,
    pub active: bool,
}

impl Reveal {
    pub fn new(kind: AnimationKind, delay_ms: u32) -> Self {
        Self {
            kind,
            delay_ms,
            active: false,
        }
    }

    pub fn active(self, active: bool) -> Self {
        Self { active, ..self }
    }

    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names = vec!["anim", self.kind.class_name()];
        if self.active {
            names.push("in-view");
        }
        names
    }

    pub fn style(&self) -> String {
        format!("transition-delay: {}ms", self.delay_ms)
    }
}

/// Delay for the `index`th item of a cascading list.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn inactive_reveal_has_no_in_view_class() {
        let reveal = Reveal::new(AnimationKind::ScaleIn, 200);
        assert_eq!(reveal.class_names(), vec!["anim", "scale-in"]);
        assert_eq!(reveal.style(), "transition-delay: 200ms");
    }

    #[test]
    fn active_flag_adds_in_view() {
        let reveal = Reveal::new(AnimationKind::default(), 0).active(true);
        assert_eq!(reveal.class_names(), vec!["anim", "fade-up", "in-view"]);
        assert_eq!(reveal.active(false).class_names(), vec!["anim", "fade-up"]);
    }

    #[test]
    fn card_and_faq_cascades() {
        let cards: Vec<u32> = (0..3).map(|i| stagger(i, 120)).collect();
        assert_eq!(cards, vec![0, 120, 240]);
        let faq: Vec<u32> = (0..6).map(|i| stagger(i, 100)).collect();
        assert_eq!(faq, vec![0, 100, 200, 300, 400, 500]);
    }

    proptest! {
        #[test]
        fn stagger_is_strictly_increasing(step in 1u32..1000, len in 2usize..200) {
            for i in 1..len {
                prop_assert!(stagger(i, step) > stagger(i - 1, step));
                prop_assert_eq!(stagger(i, step), stagger(i, step));
            }
        }
    }
}
