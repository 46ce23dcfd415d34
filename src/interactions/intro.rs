use std::rc::Rc;

use yew::Reducible;

use super::timers::{TimerKind, TimerSet};

pub const INTRO_DURATION_MS: u32 = 17_000;
pub const PROGRESS_TICK_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroConfig {
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            duration_ms: INTRO_DURATION_MS,
            tick_ms: PROGRESS_TICK_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Playing,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    ReducedMotion,
    Timeout,
    VideoEnded,
    VideoFailed,
    Skipped,
}

pub enum IntroAction {
    /// One progress interval elapsed.
    Tick,
    /// The auto-dismiss timeout fired.
    Deadline,
    VideoEnded,
    VideoFailed,
    Skip,
}

/// One-shot intro overlay: `Playing` until something dismisses it, then
/// `Dismissed` for the rest of the page load.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroOverlay {
    config: IntroConfig,
    phase: IntroPhase,
    elapsed_ms: u32,
    dismissed_by: Option<DismissReason>,
}

impl IntroOverlay {
    pub fn new(config: IntroConfig, reduced_motion: bool) -> Self {
        if reduced_motion {
            Self {
                config,
                phase: IntroPhase::Dismissed,
                elapsed_ms: 0,
                dismissed_by: Some(DismissReason::ReducedMotion),
            }
        } else {
            Self {
                config,
                phase: IntroPhase::Playing,
                elapsed_ms: 0,
                dismissed_by: None,
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == IntroPhase::Playing
    }

    pub fn dismissed_by(&self) -> Option<DismissReason> {
        self.dismissed_by
    }

    /// Percentage of the intro duration that has elapsed, in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        if self.config.duration_ms == 0 {
            return 100.0;
        }
        (f64::from(self.elapsed_ms) / f64::from(self.config.duration_ms) * 100.0).min(100.0)
    }

    /// Whole seconds left, rounded up, so the countdown never shows 0 while
    /// the overlay is still up.
    pub fn remaining_secs(&self) -> u32 {
        let remaining_ms = self.config.duration_ms.saturating_sub(self.elapsed_ms);
        (remaining_ms + 999) / 1000
    }

    pub fn skip_label(&self) -> String {
        format!("Skip ({}s)", self.remaining_secs())
    }

    /// Applies an action. Returns whether anything changed; every action is a
    /// no-op once the overlay is dismissed.
    pub fn apply(&mut self, action: IntroAction) -> bool {
        if !self.is_playing() {
            return false;
        }
        match action {
            IntroAction::Tick => {
                self.elapsed_ms = self
                    .elapsed_ms
                    .saturating_add(self.config.tick_ms)
                    .min(self.config.duration_ms);
                if self.elapsed_ms >= self.config.duration_ms {
                    self.dismiss(DismissReason::Timeout);
                }
            }
            IntroAction::Deadline => self.dismiss(DismissReason::Timeout),
            IntroAction::VideoEnded => self.dismiss(DismissReason::VideoEnded),
            IntroAction::VideoFailed => self.dismiss(DismissReason::VideoFailed),
            IntroAction::Skip => self.dismiss(DismissReason::Skipped),
        }
        true
    }

    fn dismiss(&mut self, reason: DismissReason) {
        log::debug!("intro overlay dismissed: {:?}", reason);
        self.phase = IntroPhase::Dismissed;
        self.dismissed_by = Some(reason);
    }

    /// Timers the overlay needs while it is playing: the progress interval
    /// and the auto-dismiss timeout.
    pub fn timer_requests(&self) -> Vec<TimerKind> {
        if self.is_playing() {
            vec![
                TimerKind::Every(self.config.tick_ms),
                TimerKind::After(self.config.duration_ms),
            ]
        } else {
            Vec::new()
        }
    }
}

impl Reducible for IntroOverlay {
    type Action = IntroAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Starts every timer the overlay currently asks for and hands back the set
/// that owns them.
pub fn arm_timers<H>(overlay: &IntroOverlay, mut start: impl FnMut(TimerKind) -> H) -> TimerSet<H> {
    let mut timers = TimerSet::new();
    for kind in overlay.timer_requests() {
        timers.push(start(kind));
    }
    timers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::timers::testing::CountedHandle;
    use std::cell::Cell;

    fn playing() -> IntroOverlay {
        IntroOverlay::new(IntroConfig::default(), false)
    }

    fn run_ticks(overlay: &mut IntroOverlay, n: u32) {
        for _ in 0..n {
            overlay.apply(IntroAction::Tick);
        }
    }

    #[test]
    fn starts_at_zero_with_full_countdown() {
        let overlay = playing();
        assert!(overlay.is_playing());
        assert_eq!(overlay.progress(), 0.0);
        assert_eq!(overlay.skip_label(), "Skip (17s)");
    }

    #[test]
    fn progress_is_linear_and_countdown_rounds_up() {
        let mut overlay = playing();
        run_ticks(&mut overlay, 10);
        assert!((overlay.progress() - 1000.0 / 17_000.0 * 100.0).abs() < 1e-9);
        assert_eq!(overlay.remaining_secs(), 16);

        run_ticks(&mut overlay, 1);
        assert_eq!(overlay.remaining_secs(), 16);

        run_ticks(&mut overlay, 84);
        // 9.5 s elapsed, 7.5 s left
        assert_eq!(overlay.skip_label(), "Skip (8s)");
    }

    #[test]
    fn deadline_dismisses_and_stays_dismissed() {
        let mut overlay = playing();
        assert!(overlay.apply(IntroAction::Deadline));
        assert!(!overlay.is_playing());
        assert_eq!(overlay.dismissed_by(), Some(DismissReason::Timeout));

        assert!(!overlay.apply(IntroAction::Tick));
        assert!(!overlay.apply(IntroAction::Skip));
        assert!(!overlay.is_playing());
        assert_eq!(overlay.dismissed_by(), Some(DismissReason::Timeout));
    }

    #[test]
    fn ticking_through_the_full_duration_dismisses() {
        let mut overlay = playing();
        run_ticks(&mut overlay, INTRO_DURATION_MS / PROGRESS_TICK_MS - 1);
        assert!(overlay.is_playing());
        assert_eq!(overlay.skip_label(), "Skip (1s)");

        run_ticks(&mut overlay, 1);
        assert!(!overlay.is_playing());
        assert_eq!(overlay.progress(), 100.0);
    }

    #[test]
    fn skip_halts_progress() {
        let mut overlay = playing();
        run_ticks(&mut overlay, 30);
        assert!(overlay.apply(IntroAction::Skip));
        let frozen = overlay.clone();

        run_ticks(&mut overlay, 50);
        overlay.apply(IntroAction::Deadline);
        overlay.apply(IntroAction::VideoEnded);
        assert_eq!(overlay, frozen);
        assert_eq!(overlay.dismissed_by(), Some(DismissReason::Skipped));
    }

    #[test]
    fn video_end_and_failure_dismiss() {
        let mut ended = playing();
        ended.apply(IntroAction::VideoEnded);
        assert_eq!(ended.dismissed_by(), Some(DismissReason::VideoEnded));

        let mut failed = playing();
        failed.apply(IntroAction::VideoFailed);
        assert_eq!(failed.dismissed_by(), Some(DismissReason::VideoFailed));
    }

    #[test]
    fn reduced_motion_never_shows_or_arms_timers() {
        let overlay = IntroOverlay::new(IntroConfig::default(), true);
        assert!(!overlay.is_playing());
        assert_eq!(overlay.dismissed_by(), Some(DismissReason::ReducedMotion));

        let started = Cell::new(0);
        let timers: TimerSet<()> = arm_timers(&overlay, |_| started.set(started.get() + 1));
        assert_eq!(started.get(), 0);
        assert!(timers.is_empty());
    }

    #[test]
    fn playing_overlay_arms_interval_and_deadline() {
        let overlay = playing();
        let mut kinds = Vec::new();
        let timers = arm_timers(&overlay, |kind| kinds.push(kind));
        assert_eq!(timers.pending(), 2);
        assert_eq!(
            kinds,
            vec![TimerKind::Every(PROGRESS_TICK_MS), TimerKind::After(INTRO_DURATION_MS)]
        );
    }

    #[test]
    fn no_timers_survive_dismissal() {
        let live = Rc::new(Cell::new(0));
        let mut overlay = playing();

        // Mirrors the component: timers are re-armed whenever `is_playing`
        // changes and the previous set is dropped.
        let before = arm_timers(&overlay, |_| CountedHandle::new(&live));
        assert_eq!(before.pending(), 2);
        assert_eq!(live.get(), 2);

        overlay.apply(IntroAction::Skip);
        let after = arm_timers(&overlay, |_| CountedHandle::new(&live));
        drop(before);
        assert!(after.is_empty());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn reducer_keeps_the_same_state_for_ignored_actions() {
        let state = Rc::new(IntroOverlay::new(IntroConfig::default(), true));
        let next = state.clone().reduce(IntroAction::Tick);
        assert!(Rc::ptr_eq(&state, &next));

        let playing = Rc::new(playing());
        let next = playing.clone().reduce(IntroAction::Skip);
        assert!(!Rc::ptr_eq(&playing, &next));
        assert!(!next.is_playing());
    }
}
