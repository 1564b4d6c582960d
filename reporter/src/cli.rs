use clap::Parser;

#[derive(Parser)]
#[command(about, long_about = None)]
pub struct ReporterCli {
    /// The GitHub repository whose benchmark workflows should be reported,
    /// in `owner/name` form
    #[clap(long, default_value = "0glabs/evmchainbench")]
    pub repo: String,

    /// Base URL of the GitHub REST API
    #[clap(long, default_value = "https://api.github.com")]
    pub api_base: String,
}

/// Initialise logging and parse the CLI for the reporter.
pub fn init() -> ReporterCli {
    env_logger::init();

    ReporterCli::parse()
}
