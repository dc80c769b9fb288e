/// Assigns zero-based, strictly increasing ordinal keys.
///
/// Single-threaded use only: the pipeline issues ordinals one at a time in
/// log order. No upper bound is checked; the counter would wrap only at the
/// 64-bit boundary.
#[derive(Debug, Default)]
pub struct Sequencer {
    next: u64,
}

impl Sequencer {
    /// Creates a new [`Sequencer`] starting at zero.
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Returns the current ordinal and advances the counter.
    pub fn next(&mut self) -> u64 {
        let ordinal = self.next;
        self.next += 1;
        ordinal
    }

    /// Returns the number of ordinals issued so far.
    pub const fn count(&self) -> u64 {
        self.next
    }
}
