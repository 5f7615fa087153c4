use std::fmt::Display;

use serde::Serialize;

/// One intermediate value recorded while computing a statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub label: String,
    pub value: String,
}

/// Ordered record of [TraceStep]s. Only produced in verbose mode and never
/// read back by the computation itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn new() -> Self {
        Trace::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.steps.push(TraceStep {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.label.as_str())
    }
}

/// Records steps only when a trace was requested.
///
/// Values are passed as closures so nothing is formatted when the caller is
/// not verbose.
pub(crate) struct Tracer {
    trace: Option<Trace>,
}

impl Tracer {
    pub(crate) fn new(verbose: bool) -> Self {
        Tracer {
            trace: verbose.then(Trace::new),
        }
    }

    pub(crate) fn step<F>(&mut self, label: &str, value: F)
    where
        F: FnOnce() -> String,
    {
        if let Some(trace) = self.trace.as_mut() {
            trace.push(label, value());
        }
    }

    pub(crate) fn finish(self) -> Option<Trace> {
        self.trace
    }
}

/// Outcome of one engine call: the result plus the optional verbose trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Computation<T> {
    pub result: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Trace>,
}

/// Renders a list as `[a, b, c]` using each item's `Display`.
pub fn format_list<T: Display>(items: &[T]) -> String {
    let inner = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}
