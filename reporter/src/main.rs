use evmbench_reporter::github::GithubClient;
use evmbench_reporter::{cli, collect_report};

/// Environment variable holding the GitHub API token.
const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

fn main() -> anyhow::Result<()> {
    let cli = cli::init();

    let token = std::env::var(GITHUB_TOKEN_ENV).ok();
    if token.is_none() {
        log::warn!(
            "Environment variable `{GITHUB_TOKEN_ENV}` is not set, requests will be unauthenticated"
        );
    }

    let client = GithubClient::new(&cli.api_base, token);
    let report = collect_report(&client, &cli.repo)?;

    log::debug!("Collected report: {report:?}");
    if report.is_empty() {
        log::warn!("No benchmark workflows found in {}", cli.repo);
    }

    println!("{}", report.render());

    Ok(())
}
