//! Timed UI transitions as explicit scheduled tasks
//!
//! Timers (the simulated submission delay, notice auto-dismiss, carousel
//! auto-advance) are queued here with cancellation handles and drained from
//! the event loop, so tests can drive them with a manual clock instead of
//! waiting on wall time.

use std::time::{Duration, Instant};

/// Source of the current instant, injectable for deterministic tests
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock backed by the monotonic system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: std::rc::Rc<std::cell::Cell<Instant>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: std::rc::Rc::new(std::cell::Cell::new(Instant::now())),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Work the app performs when a scheduled task comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Resolve the in-flight enquiry submission
    ResolveSubmission,
    /// Hide the transient success notice
    DismissNotice,
    /// Clear the transient status-line announcement
    ExpireAnnouncement,
    /// Advance the testimonial carousel by one slide
    AdvanceCarousel,
}

/// Handle for cancelling a task before it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct ScheduledTask {
    id: u64,
    due: Instant,
    kind: TaskKind,
}

/// Single-threaded task queue polled from the event loop
///
/// Tasks fire in due order; ties fire in scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task to fire after `delay`
    pub fn schedule(&mut self, now: Instant, delay: Duration, kind: TaskKind) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due: now + delay,
            kind,
        });
        TaskHandle(id)
    }

    /// Cancel a pending task; cancelling an already-fired task is a no-op
    pub fn cancel(&mut self, handle: TaskHandle) {
        self.tasks.retain(|t| t.id != handle.0);
    }

    /// Remove and return every task due at `now`, in firing order
    pub fn poll_due(&mut self, now: Instant) -> Vec<TaskKind> {
        let mut due: Vec<ScheduledTask> = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].due <= now {
                due.push(self.tasks.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|t| (t.due, t.id));
        due.into_iter().map(|t| t.kind).collect()
    }

    /// Whether any task of `kind` is still pending
    #[allow(dead_code)]
    pub fn has_pending(&self, kind: TaskKind) -> bool {
        self.tasks.iter().any(|t| t.kind == kind)
    }

    /// Number of pending tasks
    #[allow(dead_code)]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}
