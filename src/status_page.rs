use std::fmt;

use reqwest::{header, Client as HttpClient};
use tracing::{error, info, instrument};
use url::Url;

use crate::config::Config;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), " (", env!("CARGO_PKG_VERSION"), ")");

/// Single cookie sent along with a status page request.
#[derive(Debug, PartialEq)]
pub(crate) struct Cookie<'a> {
    pub(crate) name: &'a str,
    pub(crate) value: &'a str,
}

impl fmt::Display for Cookie<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

pub(crate) struct Client {
    url: Url,
    http_client: HttpClient,
}

impl Client {
    pub(crate) fn new(config: &Config) -> reqwest::Result<Self> {
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout.as_deref() {
            builder = builder.timeout(*timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            url: config.url.clone(),
            http_client,
        })
    }

    async fn fetch(&self, cookie: &Cookie<'_>) -> Result<String, ()> {
        let resp = self
            .http_client
            .get(self.url.clone())
            .header(header::COOKIE, cookie.to_string())
            .send()
            .await
            .map_err(|err| {
                error!(kind = "request sending", %err);
            })?;

        let status_code = resp.status();
        if !status_code.is_success() {
            error!(kind = "response status", %status_code);
            return Err(());
        }

        resp.text().await.map_err(|err| {
            error!(kind = "response body reading", %err);
        })
    }

    /// Returns whether the status page, requested with `cookie`, mentions
    /// `release`. Any request failure counts as the release being absent.
    #[instrument(skip_all, name = "status_page_check")]
    pub(crate) async fn shows_release(&self, cookie: &Cookie<'_>, release: &str) -> bool {
        info!(msg = "checking status page", url = %self.url, release, %cookie);

        let Ok(body) = self.fetch(cookie).await else {
            return false;
        };

        let found = body.contains(release);
        if found {
            info!(msg = "release found in body", release, %body);
        } else {
            info!(msg = "release not found in body", release, %body);
        }
        found
    }
}
