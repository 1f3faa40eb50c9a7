//! One-shot timer scheduling.
//!
//! Every timed behavior on the page (the typewriter loop, banner dismissal,
//! the loader overlay) is a chain of one-shot callbacks: a callback may
//! schedule the next one with its own delay. There is deliberately no
//! interval primitive because the delay changes from step to step.
//!
//! [`ManualScheduler`] runs the same callbacks against a virtual clock so the
//! timing rules can be checked without a browser.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::Duration;

/// A deferred callback.
pub type Task = Box<dyn FnOnce()>;

/// Single-threaded one-shot scheduler.
pub trait Scheduler: Clone + 'static {
    /// Run `task` once after `delay`. The task is never cancelled.
    fn schedule(&self, delay: Duration, task: Task);
}

/// A task waiting in the [`ManualScheduler`] queue
struct ScheduledTask {
    /// Virtual time at which the task runs
    due: Duration,
    /// Insertion order, breaks ties between tasks due at the same time
    seq: u64,
    task: Task,
}

impl PartialEq for ScheduledTask {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for ScheduledTask {}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first)
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_seq: u64,
    tasks: BinaryHeap<ScheduledTask>,
}

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Cloning yields a handle to the same queue, so a task can capture a clone
/// and schedule its own successor.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of tasks still waiting
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Time until the next task is due, if any
    pub fn time_until_next(&self) -> Option<Duration> {
        let queue = self.queue.borrow();
        queue
            .tasks
            .peek()
            .map(|task| task.due.saturating_sub(queue.now))
    }

    /// Move the clock forward by `by`, running every task that falls due in
    /// order. Tasks scheduled while advancing run too if they are due before
    /// the new time.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(task) = self.pop_due(target) {
            (task.task)();
        }
        self.queue.borrow_mut().now = target;
    }

    /// Advance to the next due task and run it (plus anything due at the same
    /// instant). Returns `false` when the queue is empty.
    pub fn run_next(&self) -> bool {
        match self.time_until_next() {
            Some(wait) => {
                self.advance(wait);
                true
            }
            None => false,
        }
    }

    fn pop_due(&self, target: Duration) -> Option<ScheduledTask> {
        let mut queue = self.queue.borrow_mut();
        if queue.tasks.peek().is_some_and(|task| task.due <= target) {
            let task = queue.tasks.pop()?;
            queue.now = task.due;
            Some(task)
        } else {
            None
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut queue = self.queue.borrow_mut();
        let seq = queue.next_seq;
        queue.next_seq += 1;
        let due = queue.now + delay;
        queue.tasks.push(ScheduledTask { due, seq, task });
    }
}
