use log::debug;

use super::trace::{format_list, Computation, Tracer};

/// Middle value of the sorted input, or the average of the two middle values
/// when the count is even. The input slice is left untouched.
///
/// # Panics
///
/// Panics if `numbers` is empty.
pub fn compute_median(numbers: &[f64], verbose: bool) -> Computation<f64> {
    assert!(
        !numbers.is_empty(),
        "cannot compute the median of zero numbers"
    );

    let mut tracer = Tracer::new(verbose);
    tracer.step("Calculating median for numbers", || format_list(numbers));

    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);
    tracer.step("Sorted numbers", || format_list(&sorted));

    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        let (lower, upper) = (sorted[mid - 1], sorted[mid]);
        tracer.step(
            "Because of an even number of values, the median is calculated as",
            || format!("{:.6} + {:.6} / 2", lower, upper),
        );
        (lower + upper) / 2.0
    } else {
        tracer.step("Median is the middle number", || {
            format!("{:.6}", sorted[mid])
        });
        sorted[mid]
    };

    debug!("median of {} numbers: {}", sorted.len(), median);

    Computation {
        result: median,
        trace: tracer.finish(),
    }
}
