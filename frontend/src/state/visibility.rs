/// One-way latch behind the scroll reveal animations.
///
/// Starts hidden and flips to shown the first time an observation reaches the
/// threshold. Nothing resets it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    shown: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            shown: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Feeds one intersection notification. Returns true only on the call that
    /// flips the latch.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.shown || !intersecting || ratio < self.threshold {
            return false;
        }
        self.shown = true;
        true
    }

    /// Flips the latch without an observation (timer driven reveals).
    pub fn trip(&mut self) -> bool {
        let flipped = !self.shown;
        self.shown = true;
        flipped
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    Rise,
    Grow,
    FromLeft,
    FromRight,
}

impl Entrance {
    fn class(self) -> &'static str {
        match self {
            Entrance::Rise => "reveal-rise",
            Entrance::Grow => "reveal-grow",
            Entrance::FromLeft => "reveal-left",
            Entrance::FromRight => "reveal-right",
        }
    }
}

/// Class list for a revealed block.
pub fn reveal_class(shown: bool, entrance: Entrance) -> String {
    if shown {
        format!("reveal {} shown", entrance.class())
    } else {
        format!("reveal {}", entrance.class())
    }
}

/// Inline style carrying the stagger delay of a revealed block.
pub fn reveal_style(delay_ms: u32) -> String {
    if delay_ms == 0 {
        String::new()
    } else {
        format!("transition-delay: {}ms;", delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let latch = VisibilityLatch::new(0.3);
        assert!(!latch.is_shown());
    }

    #[test]
    fn below_threshold_does_not_flip() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(!latch.observe(true, 0.1));
        assert!(!latch.is_shown());
    }

    #[test]
    fn not_intersecting_does_not_flip() {
        let mut latch = VisibilityLatch::new(0.2);
        assert!(!latch.observe(false, 0.9));
        assert!(!latch.is_shown());
    }

    #[test]
    fn flips_once_and_stays() {
        let mut latch = VisibilityLatch::new(0.2);
        assert!(latch.observe(true, 0.2));
        assert!(!latch.observe(true, 0.8));
        assert!(!latch.observe(false, 0.0));
        assert!(latch.is_shown());
    }

    #[test]
    fn trip_reports_first_flip_only() {
        let mut latch = VisibilityLatch::new(0.0);
        assert!(latch.trip());
        assert!(!latch.trip());
        assert!(latch.is_shown());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(VisibilityLatch::new(1.7).threshold(), 1.0);
        assert_eq!(VisibilityLatch::new(-0.5).threshold(), 0.0);
    }

    #[test]
    fn classes_follow_latch() {
        assert_eq!(reveal_class(false, Entrance::Rise), "reveal reveal-rise");
        assert_eq!(reveal_class(true, Entrance::Grow), "reveal reveal-grow shown");
        assert_eq!(reveal_style(0), "");
        assert_eq!(reveal_style(300), "transition-delay: 300ms;");
    }
}
