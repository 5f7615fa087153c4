use stats::input::NumberList;

/// Deterministic pseudo-random samples so runs are comparable.
pub fn samples(count: usize) -> Vec<f64> {
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 10_000) as f64 / 100.0
        })
        .collect()
}

/// Samples formatted as command line tokens, with plenty of repeats for mode.
pub fn tokens(count: usize) -> NumberList {
    let tokens = samples(count)
        .into_iter()
        .map(|value| format!("{:.0}", value))
        .collect::<Vec<_>>();
    NumberList::parse(tokens).expect("generated tokens are valid numbers")
}
