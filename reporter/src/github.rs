//! Blocking client for the GitHub Actions REST API.

use serde::Deserialize;
use std::io::Read;
use std::time::Duration;
use thiserror::Error;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "evmbench-reporter";
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Log archives for long benchmark runs reach tens of megabytes; anything
/// past this is not a log archive we want in memory.
const MAX_LOG_ARCHIVE_BYTES: usize = 512 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// A workflow definition as listed by the Actions API.
#[derive(Debug, Clone, Deserialize)]
pub struct Workflow {
    pub name: String,
    pub url: String,
}

/// A single run of a workflow. Only the log archive location is needed here.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRun {
    pub logs_url: String,
}

#[derive(Debug, Deserialize)]
struct WorkflowList {
    workflows: Vec<Workflow>,
}

#[derive(Debug, Deserialize)]
struct RunList {
    workflow_runs: Vec<WorkflowRun>,
}

pub struct GithubClient {
    agent: ureq::Agent,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client against `api_base`, authenticating with `token` when
    /// one is given.
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .timeout_write(WRITE_TIMEOUT)
            .build();

        Self {
            agent,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// List the workflow definitions configured for `repo` (`owner/name`).
    pub fn list_workflows(&self, repo: &str) -> Result<Vec<Workflow>, ClientError> {
        let url = format!("{}/repos/{}/actions/workflows", self.api_base, repo);
        let list: WorkflowList = self.get_json(&url)?;
        Ok(list.workflows)
    }

    /// Fetch the most recent run of `workflow`, or `None` when it has never
    /// run. The API returns runs newest first.
    pub fn latest_run(&self, workflow: &Workflow) -> Result<Option<WorkflowRun>, ClientError> {
        let url = format!("{}/runs", workflow.url);
        let list: RunList = self.get_json(&url)?;
        Ok(list.workflow_runs.into_iter().next())
    }

    /// Download the full log archive of `run` into memory.
    pub fn download_logs(&self, run: &WorkflowRun) -> Result<Vec<u8>, ClientError> {
        let response = self.get(&run.logs_url, None)?;
        read_response_bytes(response, MAX_LOG_ARCHIVE_BYTES).map_err(|source| ClientError::Body {
            url: run.logs_url.clone(),
            source,
        })
    }

    fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ClientError> {
        let response = self.get(url, Some(GITHUB_JSON))?;
        response.into_json::<T>().map_err(|source| ClientError::Body {
            url: url.to_string(),
            source,
        })
    }

    fn get(&self, url: &str, accept: Option<&str>) -> Result<ureq::Response, ClientError> {
        let mut request = self.agent.get(url).set("User-Agent", USER_AGENT);
        if let Some(accept) = accept {
            request = request.set("Accept", accept);
        }
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("token {token}"));
        }

        match request.call() {
            Ok(response) => {
                log::debug!("GET {url} -> {}", response.status());
                Ok(response)
            }
            Err(ureq::Error::Status(status, _)) => {
                log::debug!("GET {url} -> {status}");
                Err(ClientError::Status {
                    url: url.to_string(),
                    status,
                })
            }
            Err(err) => Err(ClientError::Transport {
                url: url.to_string(),
                source: Box::new(err),
            }),
        }
    }
}

/// Read a response into memory, enforcing a maximum byte size.
fn read_response_bytes(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, std::io::Error> {
    check_content_length(&response, max_bytes)?;
    let reader = response.into_reader();
    let mut limited = reader.take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Response exceeded {max_bytes} bytes"),
        ));
    }
    Ok(bytes)
}

fn check_content_length(response: &ureq::Response, max_bytes: usize) -> Result<(), std::io::Error> {
    let Some(length) = response.header("Content-Length") else {
        return Ok(());
    };
    let Ok(length) = length.parse::<u64>() else {
        return Ok(());
    };
    if length > max_bytes as u64 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Response too large: {length} bytes"),
        ));
    }
    Ok(())
}
