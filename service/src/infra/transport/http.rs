//! HTTP [`Transport`] implementation.

use std::time::Duration;

use common::operations::Post;
use derive_more::{Display, Error as StdError, From};
use reqwest::header;
use secrecy::{ExposeSecret as _, SecretString};
use tracerr::Traced;
use tracing as log;
use url::Url;

use crate::infra::transport::{self, Reply, Submission};
#[cfg(doc)]
use crate::infra::Transport;

/// Value of the `X-Requested-With` header marking a request as an AJAX one,
/// so the server replies with JSON instead of a page.
const REQUESTED_WITH: &str = "XMLHttpRequest";

/// [`Http`] configuration.
#[derive(Debug)]
pub struct Config {
    /// URL the submission paths are resolved against.
    pub base_url: Url,

    /// Timeout of a single request.
    pub timeout: Duration,

    /// Session cookie to authenticate requests with, if any.
    pub session_cookie: Option<SecretString>,
}

/// HTTP [`Transport`] posting forms the way a browser does.
#[derive(Debug)]
pub struct Http {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// URL the submission paths are resolved against.
    base_url: Url,

    /// Session cookie to authenticate requests with.
    session_cookie: Option<SecretString>,
}

impl Http {
    /// Creates a new [`Http`] transport with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the underlying HTTP client cannot be initialized.
    pub fn new(conf: Config) -> Result<Self, Traced<transport::Error>> {
        let Config {
            base_url,
            timeout,
            session_cookie,
        } = conf;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        Ok(Self {
            client,
            base_url,
            session_cookie,
        })
    }
}

impl transport::Transport<Post<Submission>> for Http {
    type Ok = Reply;
    type Err = Traced<transport::Error>;

    async fn execute(
        &self,
        Post(submission): Post<Submission>,
    ) -> Result<Self::Ok, Self::Err> {
        let Submission { path, fields } = submission;

        let url = self
            .base_url
            .join(&path)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        let form = fields
            .iter()
            .map(|(f, v)| (f.as_str(), v.as_str()))
            .collect::<Vec<_>>();

        let mut req = self
            .client
            .post(url.clone())
            .header("X-Requested-With", REQUESTED_WITH)
            .form(&form);
        if let Some(cookie) = &self.session_cookie {
            req = req.header(header::COOKIE, cookie.expose_secret());
        }

        log::debug!("posting {} fields to `{url}`", form.len());
        let resp = req
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        log::debug!("`{url}` replied with {status}, {} bytes", body.len());

        Reply::from_json(&body).map_err(tracerr::wrap!())
    }
}

/// [`Http`] transport error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Submission path cannot be resolved against the base URL.
    #[display("Invalid submission URL: {_0}")]
    Url(url::ParseError),

    /// HTTP request failed.
    #[display("HTTP request failed: {_0}")]
    Request(reqwest::Error),
}
