use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    /// Visible fraction of the element, in `[0, 1]`, that counts as intersecting.
    pub threshold: f64,
    /// Latch on first entry and stop observing.
    pub once: bool,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: config::DEFAULT_VISIBILITY_THRESHOLD,
            once: true,
        }
    }
}

impl ObserveOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            config::DEFAULT_VISIBILITY_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    pub fn repeating(mut self) -> Self {
        self.once = false;
        self
    }
}

/// Whether the observer should keep watching after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    Keep,
    Stop,
}

/// Viewport state of one tracked element.
///
/// `Entered` is only reachable in once mode and is terminal: nothing moves an
/// element out of it. `InView` / `OutOfView` are the repeat-mode states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    NotEntered,
    InView,
    OutOfView,
    Entered,
}

impl Visibility {
    pub fn observe(self, intersecting: bool, once: bool) -> (Visibility, Observation) {
        match (self, intersecting) {
            (Visibility::Entered, _) => (Visibility::Entered, Observation::Stop),
            (_, true) if once => (Visibility::Entered, Observation::Stop),
            (_, true) => (Visibility::InView, Observation::Keep),
            (Visibility::InView, false) => (Visibility::OutOfView, Observation::Keep),
            (state, false) => (state, Observation::Keep),
        }
    }

    pub fn is_in_view(self) -> bool {
        matches!(self, Visibility::InView | Visibility::Entered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_out_of_view() {
        assert!(!Visibility::default().is_in_view());
    }

    #[test]
    fn once_mode_latches_and_stops() {
        let (state, obs) = Visibility::NotEntered.observe(false, true);
        assert_eq!((state, obs), (Visibility::NotEntered, Observation::Keep));

        let (state, obs) = state.observe(true, true);
        assert_eq!((state, obs), (Visibility::Entered, Observation::Stop));

        // Scrolling back out does not hide it again.
        let (state, _) = state.observe(false, true);
        assert!(state.is_in_view());
    }

    #[test]
    fn repeat_mode_toggles_both_ways() {
        let (state, obs) = Visibility::NotEntered.observe(true, false);
        assert_eq!((state, obs), (Visibility::InView, Observation::Keep));
        let (state, _) = state.observe(false, false);
        assert_eq!(state, Visibility::OutOfView);
        assert!(!state.is_in_view());
        let (state, _) = state.observe(true, false);
        assert_eq!(state, Visibility::InView);
    }

    #[test]
    fn thresholds_are_clamped() {
        assert_eq!(ObserveOptions::default().with_threshold(1.5).threshold, 1.0);
        assert_eq!(ObserveOptions::default().with_threshold(-0.2).threshold, 0.0);
        assert_eq!(
            ObserveOptions::default().with_threshold(f64::NAN).threshold,
            config::DEFAULT_VISIBILITY_THRESHOLD
        );
        let options = ObserveOptions::default();
        assert!(options.once);
        assert!(!options.repeating().once);
    }

    proptest! {
        #[test]
        fn once_mode_never_reverts(events in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut state = Visibility::NotEntered;
            let mut seen = false;
            for intersecting in events {
                let (next, obs) = state.observe(intersecting, true);
                seen |= intersecting;
                prop_assert_eq!(next.is_in_view(), seen);
                prop_assert_eq!(obs == Observation::Stop, seen);
                state = next;
            }
        }

        #[test]
        fn repeat_mode_mirrors_last_event(events in proptest::collection::vec(any::<bool>(), 1..64)) {
            let mut state = Visibility::NotEntered;
            for &intersecting in &events {
                let (next, obs) = state.observe(intersecting, false);
                prop_assert_eq!(obs, Observation::Keep);
                state = next;
            }
            prop_assert_eq!(state.is_in_view(), *events.last().unwrap());
        }
    }
}
