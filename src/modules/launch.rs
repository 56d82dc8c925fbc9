//! App launch gate
//!
//! One-shot latch that leaves attract mode. Every entry point (sidebar
//! toggle, menu item, widget button) calls it; only the first call writes.

use crate::modules::attract::AttractSequence;
use crate::scheduler::Scheduler;
use crate::types::Region;
use crate::view::ViewSurface;

#[derive(Debug, Default)]
pub struct LaunchGate {
    launched: bool,
}

impl LaunchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    /// Returns true only on the call that actually launched
    pub fn launch(
        &mut self,
        view: &mut dyn ViewSurface,
        attract: &mut AttractSequence,
        scheduler: &mut Scheduler,
    ) -> bool {
        if self.launched {
            return false;
        }
        self.launched = true;
        view.set_visible(Region::Intro, false);
        view.set_visible(Region::Main, true);
        attract.stop(scheduler);
        tracing::info!("app launched");
        true
    }
}

/// Boot state: intro visible, main view hidden
pub fn show_intro(view: &mut dyn ViewSurface) {
    view.set_visible(Region::Main, false);
    view.set_visible(Region::Intro, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecordingView;
    use std::time::{Duration, Instant};

    #[test]
    fn test_launch_is_one_shot() {
        let mut view = RecordingView::default();
        let mut sched = Scheduler::new();
        let mut attract =
            AttractSequence::new("intro", vec![], "prompt", Duration::from_millis(50));
        attract.start(&mut sched, &mut view, Instant::now());
        show_intro(&mut view);

        let mut gate = LaunchGate::new();
        assert!(gate.launch(&mut view, &mut attract, &mut sched));
        assert!(view.is_visible(Region::Main));
        assert!(!view.is_visible(Region::Intro));
        assert!(!attract.is_running());
        assert!(sched.is_empty());

        let writes = view.calls.len();
        for _ in 0..3 {
            assert!(!gate.launch(&mut view, &mut attract, &mut sched));
        }
        assert_eq!(view.calls.len(), writes);
        assert!(gate.is_launched());
    }

    #[test]
    fn test_show_intro_hides_main() {
        let mut view = RecordingView::default();
        view.set_visible(Region::Main, true);
        show_intro(&mut view);
        assert!(view.is_visible(Region::Intro));
        assert!(!view.is_visible(Region::Main));
    }
}
