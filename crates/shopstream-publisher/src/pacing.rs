//! Pacing policy for publishing loops.

use rand::Rng;
use std::time::Duration;

/// How a publishing loop spaces its iterations.
///
/// Kept separate from generation so the same generator can drive a burst,
/// a fixed-interval drip, or a jittered trickle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// No delay between iterations.
    None,
    /// A fixed delay between iterations.
    Fixed(Duration),
    /// A uniformly random delay in `[min, max]` per iteration.
    Jittered { min: Duration, max: Duration },
}

impl Pacing {
    /// The delay to apply after the current iteration, if any.
    pub fn delay<R: Rng>(&self, rng: &mut R) -> Option<Duration> {
        match self {
            Pacing::None => None,
            Pacing::Fixed(delay) => Some(*delay),
            Pacing::Jittered { min, max } => {
                if max <= min {
                    Some(*min)
                } else {
                    let secs = rng.gen_range(min.as_secs_f64()..=max.as_secs_f64());
                    Some(Duration::from_secs_f64(secs))
                }
            }
        }
    }

    /// Sleep for this policy's delay.
    pub async fn pause<R: Rng>(&self, rng: &mut R) {
        if let Some(delay) = self.delay(rng) {
            tokio::time::sleep(delay).await;
        }
    }
}
