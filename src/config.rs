use clap::Args;
use humantime::Duration;
use tracing::info;
use url::Url;

use crate::delimited::TerminatedList;
use crate::status_page::Cookie;

#[derive(Args)]
#[group(skip)]
pub(crate) struct Config {
    /// Release names expected on the status page, each one followed by `;`
    #[arg(env = "cookie_releases", long)]
    pub(crate) cookie_releases: TerminatedList,

    /// Cookie names, one per release, each one followed by `;`
    #[arg(env = "cookie_names", long)]
    pub(crate) cookie_names: TerminatedList,

    /// Cookie values, one per release, each one followed by `;`
    #[arg(env = "cookie_vals", long, hide_env_values = true)]
    pub(crate) cookie_vals: TerminatedList,

    /// Status page URL
    #[arg(env = "url", long)]
    pub(crate) url: Url,

    /// Status page request timeout (no timeout if unset)
    #[arg(env = "request_timeout", long)]
    pub(crate) request_timeout: Option<Duration>,
}

/// Release expected on the status page when requested with a cookie.
#[derive(Debug, PartialEq)]
pub(crate) struct Check<'a> {
    pub(crate) release: &'a str,
    pub(crate) cookie: Cookie<'a>,
}

impl Config {
    pub(crate) fn validate_lengths(&self) -> bool {
        let releases = self.cookie_releases.len();
        let names = self.cookie_names.len();
        let values = self.cookie_vals.len();

        if releases == names && names == values {
            info!(msg = "environment lists have equal length", checks = releases);
            true
        } else {
            info!(
                msg = "environment lists have unequal length, they must be `;`-terminated, check the environment variables",
                releases,
                names,
                values
            );
            false
        }
    }

    pub(crate) fn checks(&self) -> impl Iterator<Item = Check<'_>> {
        self.cookie_releases
            .iter()
            .zip(self.cookie_names.iter())
            .zip(self.cookie_vals.iter())
            .map(|((release, name), value)| Check {
                release,
                cookie: Cookie { name, value },
            })
    }
}
