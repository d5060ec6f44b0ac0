/// Tracks whether the page is scrolled past a fixed offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    threshold_px: f64,
    past_threshold: bool,
}

impl ScrollState {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            past_threshold: false,
        }
    }

    pub fn is_past(&self, offset: f64) -> bool {
        offset > self.threshold_px
    }

    /// Recomputes from the live offset. Returns the new flag only when it changed.
    pub fn update(&mut self, offset: f64) -> Option<bool> {
        let past = self.is_past(offset);
        if past == self.past_threshold {
            return None;
        }
        self.past_threshold = past;
        Some(past)
    }

    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NAVBAR_SCROLL_THRESHOLD_PX;
    use proptest::prelude::*;

    #[test]
    fn boundary_is_exclusive() {
        let state = ScrollState::new(NAVBAR_SCROLL_THRESHOLD_PX);
        assert!(!state.is_past(0.0));
        assert!(!state.is_past(50.0));
        assert!(state.is_past(50.0001));
        assert!(state.is_past(51.0));
    }

    #[test]
    fn flips_at_the_crossing_in_both_directions() {
        let mut state = ScrollState::new(NAVBAR_SCROLL_THRESHOLD_PX);
        assert_eq!(state.update(10.0), None);
        assert_eq!(state.update(50.0), None);
        assert_eq!(state.update(51.0), Some(true));
        assert_eq!(state.update(400.0), None);
        assert_eq!(state.update(50.0), Some(false));
        assert!(!state.past_threshold());
    }

    proptest! {
        #[test]
        fn settles_on_final_offset(offsets in proptest::collection::vec(0.0f64..2000.0, 1..100)) {
            let mut state = ScrollState::new(NAVBAR_SCROLL_THRESHOLD_PX);
            for &offset in &offsets {
                state.update(offset);
            }
            let last = *offsets.last().unwrap();
            prop_assert_eq!(state.past_threshold(), last > NAVBAR_SCROLL_THRESHOLD_PX);
        }
    }
}
