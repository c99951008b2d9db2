//! Stepped counter animation.
//!
//! A counter climbs from zero to its target in [`COUNTER_STEPS`] equal
//! increments, one per [`TICK_INTERVAL`]. Displayed values are floored,
//! never decrease, and the last one is exactly the target.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Increments needed to reach the target.
pub const COUNTER_STEPS: u32 = 50;

/// Delay between displayed values.
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Sequence of values a counter displays, one per tick.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self {
            target,
            increment: target as f64 / f64::from(COUNTER_STEPS),
            current: 0.0,
            done: false,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }

        // The accumulator may pass the target; the display never does.
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u64)
        }
    }
}

/// Handle to a running counter animation.
#[derive(Debug)]
pub struct CounterHandle {
    task: JoinHandle<()>,
}

impl CounterHandle {
    /// Stops the animation; no further values are displayed.
    pub fn cancel(&self) {
        self.task.abort();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the animation to end. Returns `true` if it reached its
    /// target and `false` if it was cancelled.
    pub async fn finished(self) -> bool {
        self.task.await.is_ok()
    }
}

/// Animates a counter on the current tokio runtime, calling `display`
/// with each value.
pub fn spawn_counter<F>(target: u64, period: Duration, mut display: F) -> CounterHandle
where
    F: FnMut(u64) + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately.
        interval.tick().await;

        for value in CounterAnimation::new(target) {
            interval.tick().await;
            display(value);
        }
    });

    CounterHandle { task }
}
