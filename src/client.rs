//! 1secmail async client implementation.

use crate::{Error, MessageDetail, MessageSummary, Result};
use std::time::Duration;
use tracing::{debug, instrument};

/// Async client for the 1secmail temporary email service.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom
/// settings like proxies, timeouts, and a custom user agent.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    proxy: Option<String>,
    api_url: String,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new 1secmail client with default settings.
    ///
    /// Acquires the underlying connection pool; no network request is
    /// issued until the first operation.
    ///
    /// # Examples
    /// ```no_run
    /// # use nowmail::Client;
    /// let client = Client::new()?;
    /// # Ok::<(), nowmail::Error>(())
    /// ```
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Get the proxy URL if one was configured.
    ///
    /// Returns `None` when no proxy was set on the builder.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Ask the provider to allocate `count` random mailbox addresses.
    ///
    /// # Arguments
    /// * `count` - How many addresses to allocate; must be at least 1
    ///
    /// # Returns
    /// Exactly `count` addresses of the form `login@domain`; a batch of
    /// the wrong size or with a malformed address is an [`Error::Api`]
    ///
    /// # Examples
    /// ```no_run
    /// # use nowmail::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), nowmail::Error> {
    /// let client = Client::new()?;
    /// let mailboxes = client.generate_random_mailbox(5).await?;
    /// for mailbox in mailboxes {
    ///     println!("{mailbox}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn generate_random_mailbox(&self, count: usize) -> Result<Vec<String>> {
        if count == 0 {
            return Err(Error::Api("mailbox count must be at least 1".to_string()));
        }

        let params = [
            ("action", "genRandomMailbox".to_string()),
            ("count", count.to_string()),
        ];

        let addresses: Vec<String> = self
            .http
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if addresses.len() != count {
            return Err(Error::Api(format!(
                "requested {count} mailboxes, provider returned {}",
                addresses.len()
            )));
        }
        if let Some(bad) = addresses.iter().find(|a| split_address(a).is_none()) {
            return Err(Error::Api(format!("provider returned malformed address: {bad}")));
        }

        debug!(count, "allocated mailboxes");
        Ok(addresses)
    }

    /// List the messages currently in a mailbox.
    ///
    /// An unknown or invalid `login`/`domain` pair is an empty inbox,
    /// not an error.
    ///
    /// # Arguments
    /// * `login` - Part of the address before the `@`
    /// * `domain` - Part of the address after the `@`
    ///
    /// # Returns
    /// A possibly empty list of message summaries
    ///
    /// # Examples
    /// ```no_run
    /// # use nowmail::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), nowmail::Error> {
    /// let client = Client::new()?;
    /// let messages = client.check_mailbox("demo", "1secmail.com").await?;
    /// for msg in messages {
    ///     println!("{}: {}", msg.from, msg.subject);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn check_mailbox(&self, login: &str, domain: &str) -> Result<Vec<MessageSummary>> {
        let params = [
            ("action", "getMessages".to_string()),
            ("login", login.to_string()),
            ("domain", domain.to_string()),
        ];

        let response = self.http.get(&self.api_url).query(&params).send().await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "provider rejected mailbox, treating as empty");
            return Ok(Vec::new());
        }

        let value: serde_json::Value = response.json().await?;
        let messages: Vec<MessageSummary> = value
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| serde_json::from_value(v.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        debug!(count = messages.len(), "checked mailbox");
        Ok(messages)
    }

    /// Fetch the full content of one message.
    ///
    /// # Arguments
    /// * `login` - Part of the address before the `@`
    /// * `domain` - Part of the address after the `@`
    /// * `message_id` - Id from a [`MessageSummary`]
    ///
    /// # Returns
    /// The message detail, or `None` when the provider does not know
    /// the id for that mailbox; a rejected id or an undecodable payload
    /// is an [`Error::Api`]
    ///
    /// # Examples
    /// ```no_run
    /// # use nowmail::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), nowmail::Error> {
    /// let client = Client::new()?;
    /// let messages = client.check_mailbox("demo", "1secmail.com").await?;
    /// if let Some(msg) = messages.first() {
    ///     if let Some(detail) = client.fetch_message("demo", "1secmail.com", msg.id).await? {
    ///         println!("{}", detail.text_body);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn fetch_message(
        &self,
        login: &str,
        domain: &str,
        message_id: u64,
    ) -> Result<Option<MessageDetail>> {
        let params = [
            ("action", "readMessage".to_string()),
            ("login", login.to_string()),
            ("domain", domain.to_string()),
            ("id", message_id.to_string()),
        ];

        let body = self
            .http
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // The provider reports a missing message as a plain-text body,
        // not an error status.
        if body.trim().eq_ignore_ascii_case("message not found") {
            debug!(message_id, "message not found");
            return Ok(None);
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|err| Error::Api(format!("malformed message payload: {err}")))
    }

    /// Release the underlying connection pool.
    ///
    /// Consuming the client makes a second close a compile error, and
    /// pending borrows from in-flight calls must have completed before
    /// it can be called. Dropping the client without calling `close`
    /// releases the pool all the same.
    ///
    /// # Examples
    /// ```no_run
    /// # use nowmail::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), nowmail::Error> {
    /// let client = Client::new()?;
    /// client.close().await;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn close(self) {
        debug!("releasing connection pool");
    }
}

/// Split a `login@domain` address into its two parts.
///
/// Returns `None` unless the address contains exactly one `@` with
/// non-empty text on both sides.
pub fn split_address(address: &str) -> Option<(&str, &str)> {
    let (login, domain) = address.split_once('@')?;
    if login.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some((login, domain))
}

const API_URL: &str = "https://www.1secmail.com/api/v1/";
const USER_AGENT_VALUE: &str = concat!("nowmail/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring a 1secmail client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    api_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No proxy
    /// - Strict TLS validation
    /// - `nowmail/<version>` user agent
    /// - Default 1secmail API endpoint
    /// - 30 second request timeout
    pub fn new() -> Self {
        Self {
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            api_url: API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:9050").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the API endpoint URL.
    ///
    /// Useful for testing against a local mock server or when the
    /// provider changes its endpoint.
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the per-request timeout (default: 30 seconds).
    ///
    /// A request that exceeds it surfaces as [`Error::Network`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client, acquiring its connection pool.
    ///
    /// The 1secmail API is tokenless, so no bootstrap request is made.
    ///
    /// # Examples
    /// ```no_run
    /// # use nowmail::Client;
    /// let client = Client::builder()
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok::<(), nowmail::Error>(())
    /// ```
    pub fn build(self) -> Result<Client> {
        let mut builder = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            proxy: self.proxy,
            api_url: self.api_url,
        })
    }
}
