use std::process::ExitCode;

use tracing::{info, instrument};

use crate::config::Config;
use crate::status_page::Client;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    /// HTTP-like status code reported to the caller.
    pub(crate) fn status_code(self) -> u16 {
        match self {
            Self::Passed => 200,
            Self::Failed => 500,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Passed => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// Checks every configured release in order, stopping at the first failure.
#[instrument(skip_all, name = "health_check_run")]
pub(crate) async fn run(config: &Config, client: &Client) -> Outcome {
    if !config.validate_lengths() {
        return Outcome::Failed;
    }

    for (index, check) in config.checks().enumerate() {
        if !client.shows_release(&check.cookie, check.release).await {
            info!(msg = "check failed, skipping remaining ones", index);
            return Outcome::Failed;
        }
    }

    info!(msg = "all checks passed");
    Outcome::Passed
}
