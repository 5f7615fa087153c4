use log::debug;

use super::trace::{format_list, Computation, Tracer};

/// Arithmetic mean: plain left-to-right summation divided by the count.
///
/// # Panics
///
/// Panics if `numbers` is empty. Callers validate input with
/// [NumberList](crate::input::NumberList) first.
pub fn compute_mean(numbers: &[f64], verbose: bool) -> Computation<f64> {
    assert!(!numbers.is_empty(), "cannot compute the mean of zero numbers");

    let mut tracer = Tracer::new(verbose);
    tracer.step("Calculating mean for numbers", || format_list(numbers));

    let sum: f64 = numbers.iter().sum();
    let count = numbers.len();
    let mean = sum / count as f64;

    tracer.step("Sum of numbers", || format!("{:.6}", sum));
    tracer.step("Count of numbers", || count.to_string());
    tracer.step("Mean is calculated as sum / count", || {
        format!("{:.6} / {}", sum, count)
    });

    debug!("mean of {} numbers: sum={} mean={}", count, sum, mean);

    Computation {
        result: mean,
        trace: tracer.finish(),
    }
}
