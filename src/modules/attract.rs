//! Attract sequence
//!
//! Cycles the intro screen text: intro line, each filler line in order, the
//! prompt line, then back to the intro. One step per scheduler tick until
//! stopped by the launch gate.

use crate::config::AttractConfig;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::view::ViewSurface;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct AttractSequence {
    /// intro, fillers..., prompt
    lines: Vec<String>,
    cursor: usize,
    interval: Duration,
    task: Option<TaskHandle>,
}

impl AttractSequence {
    pub fn new(
        intro: impl Into<String>,
        fillers: Vec<String>,
        prompt: impl Into<String>,
        interval: Duration,
    ) -> Self {
        let mut lines = Vec::with_capacity(fillers.len() + 2);
        lines.push(intro.into());
        lines.extend(fillers);
        lines.push(prompt.into());
        Self {
            lines,
            cursor: 0,
            interval,
            task: None,
        }
    }

    pub fn from_config(cfg: &AttractConfig) -> Self {
        Self::new(
            cfg.intro_line.clone(),
            cfg.filler_lines.clone(),
            cfg.prompt_line.clone(),
            Duration::from_millis(cfg.interval_ms),
        )
    }

    /// Show the intro line now and schedule the cycle.
    /// Restarting an already running sequence reuses its task.
    pub fn start(&mut self, scheduler: &mut Scheduler, view: &mut dyn ViewSurface, now: Instant) {
        self.cursor = 0;
        view.set_cycling_text(&self.lines[0]);
        if self.task.is_none() {
            self.task = Some(scheduler.schedule_repeating(self.interval, now));
        }
        tracing::debug!(lines = self.lines.len(), interval = ?self.interval, "attract started");
    }

    /// Advance one line; called when the sequence's task fires
    pub fn advance(&mut self, view: &mut dyn ViewSurface) {
        self.cursor = (self.cursor + 1) % self.lines.len();
        view.set_cycling_text(&self.lines[self.cursor]);
    }

    /// Cancel the cycle. Returns true only if a running task was cancelled.
    pub fn stop(&mut self, scheduler: &mut Scheduler) -> bool {
        let Some(handle) = self.task.take() else {
            return false;
        };
        scheduler.cancel(handle);
        tracing::debug!("attract stopped");
        true
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn owns(&self, handle: TaskHandle) -> bool {
        self.task == Some(handle)
    }
}
