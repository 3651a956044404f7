//! Synthetic workload generation.

use rand::Rng;

use crate::models::ProcessSpec;

/// Generates `count` processes `P1..Pn` arriving at t=0.
///
/// Burst times are uniform in `1..=max_burst`. A `max_burst` below 1 is
/// treated as 1.
pub fn random_workload<R: Rng>(
    rng: &mut R,
    count: usize,
    max_burst: i64,
) -> Vec<ProcessSpec> {
    let max_burst = max_burst.max(1);
    (1..=count)
        .map(|i| ProcessSpec::new(format!("P{i}"), rng.random_range(1..=max_burst)))
        .collect()
}
