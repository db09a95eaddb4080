//! Run-time measurement helpers for puzzle solutions

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::info;

use crate::io::configuration::MAX_TIMING_RUNS;
use crate::io::error::{Result, invalid_parameter};

/// Outcome of [`average_time`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AverageTiming<T> {
    /// Value returned by the first run
    pub result: T,
    /// Duration of the first run
    pub first_run: Duration,
    /// Mean duration of the repeated runs, `None` when only one run was made
    pub average: Option<Duration>,
}

/// Run `f` once and report how long it took
pub fn time_it<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    info!(label, ?elapsed, "run time");
    (result, elapsed)
}

/// Run `f` `runs` times, keeping the first result
///
/// The first run is timed on its own; the mean covers the remaining
/// `runs - 1` repetitions, whose results are discarded.
///
/// # Errors
///
/// Returns `InvalidParameter` if `runs` is zero or exceeds
/// [`MAX_TIMING_RUNS`].
pub fn average_time<T>(
    label: &str,
    runs: usize,
    mut f: impl FnMut() -> T,
) -> Result<AverageTiming<T>> {
    if runs == 0 {
        return Err(invalid_parameter("runs", &runs, &"must run at least once"));
    }
    if runs > MAX_TIMING_RUNS {
        return Err(invalid_parameter(
            "runs",
            &runs,
            &format!("must not exceed {MAX_TIMING_RUNS}"),
        ));
    }

    let (result, first_run) = time_it(label, &mut f);

    let repeats = runs - 1;
    let mut total = Duration::ZERO;
    for _ in 0..repeats {
        let start = Instant::now();
        black_box(f());
        total += start.elapsed();
    }

    let average = u32::try_from(repeats)
        .ok()
        .filter(|&count| count > 0)
        .map(|count| total / count);
    if let Some(average) = average {
        info!(label, repeats, ?average, "average run time");
    }

    Ok(AverageTiming {
        result,
        first_run,
        average,
    })
}
