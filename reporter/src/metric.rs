//! Parsing of the benchmark result line.

use regex::Regex;
use std::sync::LazyLock;

static METRIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Best TPS: (\d+) GasUsed%: ([\d.]+)").expect("metric regex must compile")
});

/// One benchmark measurement: peak throughput and the fraction of the gas
/// budget consumed. `gas_used` stays a ratio in [0, 1]; it is only scaled to
/// a percentage when rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunMetric {
    pub best_tps: u64,
    pub gas_used: f64,
}

/// Extract the metric from a log line, or `None` when the line does not
/// carry one. A match whose captures do not convert cleanly (a dotted
/// non-number in the gas field, an overflowing TPS count) also counts as no
/// metric.
pub fn parse_metric_line(line: &str) -> Option<RunMetric> {
    let captures = METRIC_PATTERN.captures(line)?;
    let best_tps = captures[1].parse().ok()?;
    let gas_used = captures[2].parse().ok()?;
    Some(RunMetric { best_tps, gas_used })
}
