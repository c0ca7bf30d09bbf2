/// Receives advisory progress from the iteration loop.
///
/// Called at most once per round with `(iteration, max_iter)` after the round
/// has been applied. Implementations must not rely on being called for every
/// round: the loop stops early once every point has escaped.
pub trait ProgressObserver: Send + Sync {
    fn on_round(&self, iteration: u32, max_iter: u32);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    #[inline]
    fn on_round(&self, _iteration: u32, _max_iter: u32) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(u32, u32) + Send + Sync,
{
    #[inline]
    fn on_round(&self, iteration: u32, max_iter: u32) {
        self(iteration, max_iter)
    }
}
