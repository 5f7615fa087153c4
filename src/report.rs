//! Presentation of engine results as plain text or JSON.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::engine::{format_list, Computation, Mode, Modality, Trace};
use crate::error::Result;
use crate::input::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Mean,
    Median,
    Mode,
}

impl Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Mode => "mode",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Value(f64),
    Mode(Mode<Number>),
}

/// A finished computation ready to be shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    statistic: Statistic,
    outcome: Outcome,
    trace: Option<Trace>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    statistic: Statistic,
    result: JsonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a Trace>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonResult {
    Value(f64),
    Mode { kind: Modality, values: Vec<f64> },
}

/// Truncates toward negative infinity at two decimal places.
fn floor_cents(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

impl Report {
    pub fn from_value(statistic: Statistic, computation: Computation<f64>) -> Self {
        Report {
            statistic,
            outcome: Outcome::Value(computation.result),
            trace: computation.trace,
        }
    }

    pub fn from_mode(computation: Computation<Mode<Number>>) -> Self {
        Report {
            statistic: Statistic::Mode,
            outcome: Outcome::Mode(computation.result),
            trace: computation.trace,
        }
    }

    /// The `Result: ...` line.
    pub fn result_line(&self) -> String {
        match &self.outcome {
            Outcome::Value(value) => {
                format!("Result: {:.6} ({:.2})", value, floor_cents(*value))
            }
            Outcome::Mode(Mode::NoMode) => "Result: no mode".to_string(),
            Outcome::Mode(Mode::Single(number)) => format!("Result: {}", number),
            Outcome::Mode(mode @ Mode::Multi(numbers)) => {
                format!("Result: {}: {}", mode.modality(), format_list(numbers))
            }
        }
    }

    /// Text output; verbose reports list every trace step before the result.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        if let Some(trace) = &self.trace {
            lines.push(format!(
                "Verbose mode is enabled. Calculating {}...",
                self.statistic
            ));
            lines.extend(
                trace
                    .steps()
                    .iter()
                    .map(|step| format!("{}: {}", step.label, step.value)),
            );
        }
        lines.push(self.result_line());
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String> {
        let result = match &self.outcome {
            Outcome::Value(value) => JsonResult::Value(*value),
            Outcome::Mode(mode) => JsonResult::Mode {
                kind: mode.modality(),
                values: mode.values().iter().map(Number::value).collect(),
            },
        };
        let report = JsonReport {
            statistic: self.statistic,
            result,
            trace: self.trace.as_ref(),
        };
        Ok(serde_json::to_string(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::engine::{compute_mean, compute_median, compute_mode};
    use crate::input::NumberList;

    fn mode_report(tokens: &[&str], verbose: bool) -> Report {
        let list = NumberList::parse(tokens).unwrap();
        Report::from_mode(compute_mode(list.keys(), verbose))
    }

    #[test]
    fn test_value_result_line() {
        let list = NumberList::parse(["1.05", "2.15", "9.99", "3.6", "7.772"]).unwrap();
        let report = Report::from_value(Statistic::Mean, compute_mean(list.values(), false));
        assert_eq!(report.result_line(), "Result: 4.912400 (4.91)");

        let report = Report::from_value(
            Statistic::Median,
            compute_median(&[10.0, 3.0, 5.0, 9.0, 2.0, 6.0], false),
        );
        assert_eq!(report.result_line(), "Result: 5.500000 (5.50)");
    }

    #[test]
    fn test_floor_cents_rounds_down() {
        assert_eq!(floor_cents(2.999), 2.99);
        assert_eq!(floor_cents(-1.001), -1.01);
    }

    #[test]
    fn test_mode_result_lines() {
        assert_eq!(
            mode_report(&["1", "2", "3", "2", "5", "6", "2", "8"], false).result_line(),
            "Result: 2"
        );
        assert_eq!(
            mode_report(&["1", "2", "3", "4", "5"], false).result_line(),
            "Result: no mode"
        );
        assert_eq!(
            mode_report(&["1", "2", "1", "2", "3"], false).result_line(),
            "Result: bimodal: [1, 2]"
        );
        assert_eq!(
            mode_report(&["1", "2", "3", "3", "2", "1"], false).result_line(),
            "Result: multimodal: [3, 2, 1]"
        );
    }

    #[test]
    fn test_mode_shows_first_spelling() {
        assert_eq!(
            mode_report(&["2.0", "2", "3"], false).result_line(),
            "Result: 2.0"
        );
    }

    #[test]
    fn test_verbose_text() {
        let report = Report::from_value(Statistic::Mean, compute_mean(&[1.0, 2.0, 3.0], true));
        let text = report.to_text();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Verbose mode is enabled. Calculating mean...");
        assert_eq!(lines[1], "Calculating mean for numbers: [1, 2, 3]");
        assert_eq!(lines[2], "Sum of numbers: 6.000000");
        assert_eq!(lines.last(), Some(&"Result: 2.000000 (2.00)"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_quiet_text_is_result_only() {
        let report = Report::from_value(Statistic::Median, compute_median(&[1.0], false));
        assert_eq!(report.to_text(), "Result: 1.000000 (1.00)");
    }

    #[test]
    fn test_json_value() {
        let report = Report::from_value(Statistic::Mean, compute_mean(&[1.0, 2.0], false));
        let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json, json!({"statistic": "mean", "result": 1.5}));
    }

    #[test]
    fn test_json_mode_with_trace() {
        let json: Value =
            serde_json::from_str(&mode_report(&["1", "1", "2"], true).to_json().unwrap()).unwrap();

        assert_eq!(json["statistic"], "mode");
        assert_eq!(json["result"], json!({"kind": "single", "values": [1.0]}));
        assert_eq!(json["trace"][0]["label"], "Calculating mode for numbers");
        assert_eq!(json["trace"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_json_no_mode() {
        let json: Value =
            serde_json::from_str(&mode_report(&["1", "2"], false).to_json().unwrap()).unwrap();
        assert_eq!(json["result"], json!({"kind": "none", "values": []}));
    }
}
