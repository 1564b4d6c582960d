//! Reports the latest benchmark results from evmchainbench CI runs.
//!
//! Each benchmark workflow in the target repository produces a log archive
//! whose `Build Chain` step ends with a `Best TPS: .. GasUsed%: ..` line.
//! The pipeline here lists the workflows, pulls the log archive of each
//! workflow's most recent run, extracts that line, and accumulates the
//! numbers into a table keyed by chain and workload category.

use crate::github::{GithubClient, Workflow};
use crate::metric::RunMetric;
use crate::report::ReportTable;
use crate::workflow::WorkflowDescriptor;
use anyhow::Context;

pub mod cli;
pub mod github;
pub mod logs;
pub mod metric;
pub mod report;
pub mod workflow;

/// Build the benchmark report for `repo`, one workflow at a time.
///
/// A workflow whose name does not follow the benchmark convention is skipped
/// with a warning. Any later failure (no runs yet, log download failure,
/// missing build-chain output, unparseable result line) leaves that
/// workflow's cell blank and moves on; only the initial workflow listing is
/// fatal.
pub fn collect_report(client: &GithubClient, repo: &str) -> anyhow::Result<ReportTable> {
    let workflows = client
        .list_workflows(repo)
        .with_context(|| format!("Failed to list workflows for {repo}"))?;
    log::info!("Repository {repo} has {} workflows", workflows.len());

    let mut table = ReportTable::new();
    for workflow in workflows {
        let descriptor = match WorkflowDescriptor::parse(&workflow.name) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                log::warn!("Skipping workflow '{}': {err}", workflow.name);
                continue;
            }
        };

        log::info!(
            "Collecting {} / {} from workflow '{}'",
            descriptor.chain,
            descriptor.category,
            workflow.name
        );
        let metric = latest_run_metric(client, &workflow);
        table.record(&descriptor.chain, descriptor.category, metric);
    }

    Ok(table)
}

/// Fetch and parse the metric from the latest run of `workflow`, degrading
/// every failure past the name parse to `None`.
fn latest_run_metric(client: &GithubClient, workflow: &Workflow) -> Option<RunMetric> {
    let run = match client.latest_run(workflow) {
        Ok(Some(run)) => run,
        Ok(None) => {
            log::info!("Workflow '{}' has no recorded runs", workflow.name);
            return None;
        }
        Err(err) => {
            log::warn!("Failed to fetch runs for workflow '{}': {err}", workflow.name);
            return None;
        }
    };

    let archive = match client.download_logs(&run) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!(
                "Failed to download logs for workflow '{}': {err}",
                workflow.name
            );
            return None;
        }
    };

    let line = match logs::last_build_chain_line(&archive) {
        Ok(Some(line)) => line,
        Ok(None) => {
            log::info!(
                "Logs for workflow '{}' have no build-chain output",
                workflow.name
            );
            return None;
        }
        Err(err) => {
            log::warn!(
                "Failed to extract logs for workflow '{}': {err}",
                workflow.name
            );
            return None;
        }
    };

    log::debug!("Last build-chain line for '{}': {line}", workflow.name);
    let metric = metric::parse_metric_line(&line);
    if metric.is_none() {
        log::info!(
            "Last build-chain line for workflow '{}' carries no TPS metric",
            workflow.name
        );
    }

    metric
}
