pub mod gate;
pub mod prefetch;
pub mod swipe;

pub use gate::FrameGate;
pub use prefetch::PrefetchRegistry;
pub use swipe::{SwipeDirection, SwipeTracker};
