/// Optional side channel reporting how far a run has come.
///
/// Called from the collecting loop only, never from probe tasks, so
/// implementations never see concurrent calls.
pub trait Progress: Send + Sync {
    fn on_start(&self, _total: usize) {}

    fn on_complete(&self) {}
}

/// Discards all progress events.
pub struct Silent;

impl Progress for Silent {}
