use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Horizontal swipe recogniser fed with touch screen coordinates.
#[derive(Default, Debug, Clone)]
pub struct SwipeTracker {
    start_x: f64,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
    }

    pub fn finish(&self, x: f64) -> Option<SwipeDirection> {
        classify(self.start_x - x)
    }
}

/// `delta` is start minus end: positive means the finger travelled left.
/// Travel must exceed the threshold; landing exactly on it is not a swipe.
pub fn classify(delta: f64) -> Option<SwipeDirection> {
    if delta > config::SWIPE_THRESHOLD_PX {
        Some(SwipeDirection::Left)
    } else if delta < -config::SWIPE_THRESHOLD_PX {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_directions() {
        assert_eq!(classify(60.0), Some(SwipeDirection::Left));
        assert_eq!(classify(-60.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(classify(50.0), None);
        assert_eq!(classify(-50.0), None);
        assert_eq!(classify(50.5), Some(SwipeDirection::Left));
        assert_eq!(classify(-50.5), Some(SwipeDirection::Right));
        assert_eq!(classify(0.0), None);
    }

    #[test]
    fn test_tracker_full_gesture() {
        let mut t = SwipeTracker::default();
        t.begin(300.0);
        assert_eq!(t.finish(200.0), Some(SwipeDirection::Left));
        t.begin(100.0);
        assert_eq!(t.finish(180.0), Some(SwipeDirection::Right));
        t.begin(100.0);
        assert_eq!(t.finish(120.0), None);
    }
}
