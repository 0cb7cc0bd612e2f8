use log::trace;
use parking_lot::Mutex;
use tsm_core::BestTour;

/// The one piece of state shared between workers.
///
/// Every read-then-write happens under the lock, so two workers can never interleave
/// a comparison and an update.
#[derive(Debug)]
pub struct GlobalBest {
    inner: Mutex<BestTour>,
}

impl GlobalBest {
    pub fn new(initial: BestTour) -> Self {
        Self {
            inner: Mutex::new(initial),
        }
    }

    /// Replace the shared best with `local` iff `local.cost` is strictly lower.
    ///
    /// Equal costs are not merged: with several optimal tours, the survivor depends on
    /// which worker reaches the lock first.
    pub fn merge(&self, worker: usize, local: &BestTour) -> bool {
        let mut global = self.inner.lock();
        let replaced = global.offer(local.cost, &local.path);
        trace!(
            "worker {worker}: local cost {} {} global",
            local.cost,
            if replaced { "replaced" } else { "did not beat" }
        );
        replaced
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> BestTour {
        self.inner.lock().clone()
    }

    pub fn into_inner(self) -> BestTour {
        self.inner.into_inner()
    }
}
