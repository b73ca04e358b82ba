/// A repeating timer that can be stopped.
pub trait TimerHandle {
    fn cancel(&self);
}

/// Owner of at most one live ramp timer.
///
/// Arming a new timer always cancels the previous one first, so two ramps
/// can never write the temperature at once.
#[derive(Debug)]
pub struct TimerSlot<H: TimerHandle> {
    active: Option<H>,
}

impl<H: TimerHandle> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<H: TimerHandle> TimerSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.active.is_some()
    }

    /// Store `handle` as the live timer, cancelling whatever was there.
    pub fn arm(&mut self, handle: H) {
        self.cancel();
        self.active = Some(handle);
    }

    /// Cancel the live timer, if any. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeTimer {
        cancelled: Rc<Cell<u32>>,
    }

    impl TimerHandle for FakeTimer {
        fn cancel(&self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn fake() -> (FakeTimer, Rc<Cell<u32>>) {
        let cancelled = Rc::new(Cell::new(0));
        (FakeTimer { cancelled: cancelled.clone() }, cancelled)
    }

    #[test]
    fn test_arm_replaces_and_cancels_previous() {
        let mut slot = TimerSlot::new();
        let (first, first_cancels) = fake();
        let (second, second_cancels) = fake();

        slot.arm(first);
        assert!(slot.is_armed());
        slot.arm(second);
        assert_eq!(first_cancels.get(), 1);
        assert_eq!(second_cancels.get(), 0);
        assert!(slot.is_armed());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut slot = TimerSlot::new();
        let (timer, cancels) = fake();
        slot.arm(timer);

        assert!(slot.cancel());
        assert!(!slot.cancel());
        assert_eq!(cancels.get(), 1);
        assert!(!slot.is_armed());
    }
}
