use gloo_timers::callback::{Interval, Timeout};

/// What a component asks to have scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Every(u32),
    After(u32),
}

/// Owns every timer handle a component registered. Dropping the set drops
/// the handles, and gloo handles cancel on drop.
pub struct TimerSet<H> {
    handles: Vec<H>,
}

impl<H> TimerSet<H> {
    pub fn new() -> Self {
        Self { handles: Vec::new() }
    }

    pub fn push(&mut self, handle: H) {
        self.handles.push(handle);
    }

    pub fn pending(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H> Default for TimerSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Browser-side handle, kept alive until the set lets it go.
pub enum BrowserTimer {
    Interval { _handle: Interval },
    Timeout { _handle: Timeout },
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live handles so tests can assert nothing leaked.
    pub struct CountedHandle {
        live: Rc<Cell<usize>>,
    }

    impl CountedHandle {
        pub fn new(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Self { live: live.clone() }
        }
    }

    impl Drop for CountedHandle {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CountedHandle;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn tracks_pending_handles() {
        let live = Rc::new(Cell::new(0));
        let mut set = TimerSet::new();
        assert!(set.is_empty());
        set.push(CountedHandle::new(&live));
        set.push(CountedHandle::new(&live));
        assert_eq!(set.pending(), 2);
        assert_eq!(live.get(), 2);
    }

    #[test]
    fn dropping_the_set_releases_every_handle() {
        let live = Rc::new(Cell::new(0));
        {
            let mut set = TimerSet::new();
            set.push(CountedHandle::new(&live));
            set.push(CountedHandle::new(&live));
            assert_eq!(live.get(), 2);
        }
        assert_eq!(live.get(), 0);
    }
}
