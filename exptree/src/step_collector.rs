use log::trace;
use std::fmt::Debug;

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is implemented for the unit type `()`, which discards every step, and for
/// [`Vec`], which records them in order.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// Wraps another collector, logging every step at the `trace` level before passing it on.
#[derive(Debug, Default)]
pub struct Logged<C>(pub C);

impl<S: Debug, C: StepCollector<S>> StepCollector<S> for Logged<C> {
    fn push(&mut self, step: S) {
        trace!("step: {:?}", step);
        self.0.push(step);
    }
}
