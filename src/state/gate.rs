use std::cell::Cell;

/// Single-slot admission flag for frame scheduling. `try_acquire` succeeds
/// only while nothing is pending, which caps a gate at one scheduled
/// callback in flight.
#[derive(Default, Debug)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    pub fn try_acquire(&self) -> bool {
        if self.pending.get() {
            false
        } else {
            self.pending.set(true);
            true
        }
    }

    pub fn release(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_acquisition() {
        let gate = FrameGate::default();
        assert!(!gate.is_pending());
        assert!(gate.try_acquire());
        assert!(gate.is_pending());
        // A second acquire while pending must fail
        assert!(!gate.try_acquire());
        assert!(!gate.try_acquire());
    }

    #[test]
    fn test_release_reopens_gate() {
        let gate = FrameGate::default();
        assert!(gate.try_acquire());
        gate.release();
        assert!(!gate.is_pending());
        assert!(gate.try_acquire());
    }
}
