//! # Tick Scheduler
//!
//! Runs work after the host's current execution step has completed.
//!
//! ## Design
//!
//! The host finalizes some derived state (combine results) lazily at the
//! end of a step. Anything that must observe the committed value is queued
//! here and drained at the next tick boundary:
//!
//! ```text
//! tick N:   event ──> handler ──> handle.schedule(1, task)
//!                                        │
//! boundary: run_tick() ── tick N+1 ──────┴──> task()
//! ```
//!
//! - Tasks never run inside `schedule`
//! - Tasks due in the same tick run in the order they were scheduled
//! - Tasks scheduled while draining wait for a later boundary
//! - A task runs at most once; it leaves the queue before it is called
//! - A panicking task loses only itself; the rest of its batch stays queued
//!   and runs at the next boundary

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

struct ScheduledTask {
    due_tick: u64,
    task: Task,
}

/// Scheduler statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Tick boundaries drained.
    pub ticks: u64,
    /// Tasks executed.
    pub tasks_run: u64,
    /// Largest number of tasks run at one boundary.
    pub max_batch: usize,
}

/// Cloneable producer side of the scheduler.
///
/// Handed to whatever needs to defer work; the owning [`TickScheduler`]
/// drains it.
#[derive(Clone)]
pub struct SchedulerHandle {
    sender: Sender<ScheduledTask>,
    current_tick: Arc<AtomicU64>,
}

impl SchedulerHandle {
    /// Queues `task` to run `after_ticks` boundaries from now.
    ///
    /// `after_ticks` of zero is treated as one: deferred work never shares
    /// the step that requested it.
    pub fn schedule<F>(&self, after_ticks: u32, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = u64::from(after_ticks.max(1));
        let due_tick = self.current_tick.load(Ordering::Acquire) + delay;
        let scheduled = ScheduledTask {
            due_tick,
            task: Box::new(task),
        };
        if self.sender.send(scheduled).is_err() {
            tracing::warn!("Scheduler dropped, deferred task for tick {} discarded", due_tick);
        }
    }

    /// Returns the tick the host is currently executing.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.current_tick.load(Ordering::Acquire)
    }
}

/// Single-threaded deferred task queue drained once per host tick.
pub struct TickScheduler {
    handle: SchedulerHandle,
    receiver: Receiver<ScheduledTask>,
    /// Tasks pulled from the channel that are not due yet, in schedule order.
    waiting: Vec<ScheduledTask>,
    /// Due tasks not yet run, in schedule order.
    due: VecDeque<ScheduledTask>,
    stats: SchedulerStats,
}

impl TickScheduler {
    /// Creates a scheduler at tick 0.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            handle: SchedulerHandle {
                sender,
                current_tick: Arc::new(AtomicU64::new(0)),
            },
            receiver,
            waiting: Vec::new(),
            due: VecDeque::new(),
            stats: SchedulerStats::default(),
        }
    }

    /// Returns a producer handle.
    #[must_use]
    pub fn handle(&self) -> SchedulerHandle {
        self.handle.clone()
    }

    /// Queues a task; see [`SchedulerHandle::schedule`].
    pub fn schedule<F>(&self, after_ticks: u32, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.handle.schedule(after_ticks, task);
    }

    /// Advances to the next tick and runs every task now due.
    ///
    /// Tasks left over from a boundary that was cut short by a panic run
    /// first. Returns the number of tasks executed.
    pub fn run_tick(&mut self) -> usize {
        let tick = self.handle.current_tick.fetch_add(1, Ordering::AcqRel) + 1;
        self.waiting.extend(self.receiver.try_iter());

        let (due, later): (Vec<_>, Vec<_>) = std::mem::take(&mut self.waiting)
            .into_iter()
            .partition(|t| t.due_tick <= tick);
        self.waiting = later;
        self.due.extend(due);

        let mut count = 0;
        while let Some(scheduled) = self.due.pop_front() {
            count += 1;
            (scheduled.task)();
        }

        self.stats.ticks += 1;
        self.stats.tasks_run += count as u64;
        self.stats.max_batch = self.stats.max_batch.max(count);
        if count > 0 {
            tracing::debug!("Tick {}: ran {} deferred task(s)", tick, count);
        }
        count
    }

    /// Returns the tick the host is currently executing.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.handle.current_tick()
    }

    /// Number of tasks not yet executed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.due.len() + self.waiting.len() + self.receiver.len()
    }

    /// Returns scheduler statistics.
    #[must_use]
    pub const fn stats(&self) -> &SchedulerStats {
        &self.stats
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
