/// Doubling retry delay for failed backend fetches, capped and resettable
/// on the next successful refresh.
#[derive(Debug, Clone)]
pub struct Backoff {
    base: u64,
    max: u64,
    attempt: u32,
}

impl Backoff {
    #[must_use]
    pub fn new(base: u64, max: u64) -> Self {
        Self {
            base,
            max,
            attempt: 0,
        }
    }

    pub fn next_delay(&mut self) -> u64 {
        let factor = 1u64 << self.attempt.min(16);
        let delay = self.base.saturating_mul(factor).min(self.max);
        self.attempt = self.attempt.saturating_add(1);
        delay
    }

    pub fn reset(&mut self) {
        self.attempt = 0;
    }
}
