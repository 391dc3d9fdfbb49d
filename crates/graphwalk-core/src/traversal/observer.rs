//! Step observers
//!
//! Traversals report each visit through a [`StepObserver`] instead of
//! printing or sleeping themselves. Pacing for human viewing is layered on
//! with [`Paced`].

use std::thread;
use std::time::Duration;

use super::types::{Algorithm, TraversalStep};

/// Receives traversal progress
pub trait StepObserver {
    /// Called once the start vertex has been resolved, before the first step
    fn on_start(&mut self, _algorithm: Algorithm, _start: &str) {}

    /// Called after every visit
    fn on_step(&mut self, step: &TraversalStep);

    /// Whether `on_step` should be called at all.
    ///
    /// Building a step copies the visited-so-far sequence, so observers
    /// that discard steps return `false` and the traversal skips the work.
    fn wants_steps(&self) -> bool {
        true
    }
}

impl<F> StepObserver for F
where
    F: FnMut(&TraversalStep),
{
    fn on_step(&mut self, step: &TraversalStep) {
        self(step)
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _step: &TraversalStep) {}

    fn wants_steps(&self) -> bool {
        false
    }
}

/// Observer that keeps every step it sees
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
    pub steps: Vec<TraversalStep>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_steps(self) -> Vec<TraversalStep> {
        self.steps
    }
}

impl StepObserver for StepRecorder {
    fn on_step(&mut self, step: &TraversalStep) {
        self.steps.push(step.clone());
    }
}

/// Forwards to an inner observer, then waits `delay` after each step.
///
/// A zero delay never sleeps.
#[derive(Debug, Clone)]
pub struct Paced<O> {
    inner: O,
    delay: Duration,
}

impl<O: StepObserver> Paced<O> {
    pub fn new(inner: O, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: StepObserver> StepObserver for Paced<O> {
    fn on_start(&mut self, algorithm: Algorithm, start: &str) {
        self.inner.on_start(algorithm, start);
    }

    fn on_step(&mut self, step: &TraversalStep) {
        self.inner.on_step(step);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn wants_steps(&self) -> bool {
        self.inner.wants_steps()
    }
}
