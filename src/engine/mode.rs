use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display};
use std::hash::Hash;

use log::{debug, trace};
use serde::Serialize;

use super::trace::{format_list, Computation, Tracer};

/// Outcome of [compute_mode].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<K> {
    /// Every value appears exactly once and there is more than one value.
    NoMode,
    /// Exactly one value has the highest occurrence count.
    Single(K),
    /// Two or more values share the highest occurrence count, in the order
    /// they first reached it.
    Multi(Vec<K>),
}

/// How a [Mode] is labelled for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    None,
    #[serde(rename = "single")]
    Unimodal,
    Bimodal,
    Multimodal,
}

impl Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Modality::None => "none",
            Modality::Unimodal => "single",
            Modality::Bimodal => "bimodal",
            Modality::Multimodal => "multimodal",
        };
        f.write_str(label)
    }
}

impl<K> Mode<K> {
    pub fn modality(&self) -> Modality {
        match self {
            Mode::NoMode => Modality::None,
            Mode::Single(_) => Modality::Unimodal,
            Mode::Multi(values) if values.len() == 2 => Modality::Bimodal,
            Mode::Multi(_) => Modality::Multimodal,
        }
    }

    /// Values holding the highest count. Empty for [Mode::NoMode].
    pub fn values(&self) -> &[K] {
        match self {
            Mode::NoMode => &[],
            Mode::Single(value) => std::slice::from_ref(value),
            Mode::Multi(values) => values,
        }
    }
}

/// Most frequent value(s) of `values`, compared by exact equality of `K`.
///
/// Values are bucketed by occurrence count as they are scanned: each time a
/// value's count rises to `n` it is appended to bucket `n`. The highest
/// bucket therefore lists the tied values in the order they reached the
/// maximum.
///
/// A single distinct value is always the mode, even when it occurs once.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn compute_mode<K>(values: &[K], verbose: bool) -> Computation<Mode<K>>
where
    K: Eq + Hash + Clone + Display,
{
    assert!(!values.is_empty(), "cannot compute the mode of zero numbers");

    let mut tracer = Tracer::new(verbose);
    tracer.step("Calculating mode for numbers", || format_list(values));

    // Each distinct value maps to its first occurrence and its count, so
    // groups always hold the first-seen spelling.
    let mut frequency: HashMap<&K, (&K, usize)> = HashMap::new();
    let mut groups: BTreeMap<usize, Vec<&K>> = BTreeMap::new();
    let mut max = 0usize;

    for value in values {
        let (first, count) = frequency.entry(value).or_insert((value, 0));
        *count += 1;
        trace!("{} now seen {} time(s)", first, count);
        max = max.max(*count);
        groups.entry(*count).or_default().push(*first);
    }

    tracer.step("Frequency groups", || {
        groups
            .iter()
            .map(|(count, group)| format!("{}: {}", count, format_list(group)))
            .collect::<Vec<_>>()
            .join(", ")
    });

    tracer.step("Highest frequency", || max.to_string());
    let tied = groups.remove(&max).unwrap_or_default();

    let mode = if max == 1 && frequency.len() > 1 {
        Mode::NoMode
    } else if tied.len() == 1 {
        Mode::Single(tied[0].clone())
    } else {
        Mode::Multi(tied.into_iter().cloned().collect())
    };

    debug!(
        "mode of {} values: {} distinct, highest frequency {}, {}",
        values.len(),
        frequency.len(),
        max,
        mode.modality()
    );

    Computation {
        result: mode,
        trace: tracer.finish(),
    }
}
