//! # nowmail
//! Asynchronous wrapper around the 1secmail disposable email HTTP API, providing simple methods to allocate, poll, and read temporary inboxes from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who need throwaway addresses in integration tests, demos, or automation scripts without running mail infrastructure: configure with [`ClientBuilder`], let the provider assign random addresses, poll a mailbox for summaries ([`MessageSummary`]), then read individual messages ([`MessageDetail`]) by id.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a general-purpose mail client, SMTP sender, or durable mailbox. It only proxies the 1secmail service and inherits its availability, spam filtering, and retention limits. No retries, no local persistence, no rate limiting.
//!
//! ## Errors
//! Every operation surfaces exactly one of three kinds: [`Error::Network`] for transport failures (connection, DNS, TLS, timeout), [`Error::Api`] for requests the provider answered but rejected (bad allocation, invalid message id, undecodable payload), and [`Error::Service`] for anything else that would otherwise escape raw. The crate-wide [`Result`] alias wraps these errors. Checking a mailbox that does not exist is not an error; it is an empty inbox.
//!
//! ## Example
//! ```no_run
//! use nowmail::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nowmail::Error> {
//!     let client = Client::new()?;
//!     let mailboxes = client.generate_random_mailbox(1).await?;
//!     println!("Created: {}", mailboxes[0]);
//!
//!     let (login, domain) = nowmail::split_address(&mailboxes[0]).unwrap();
//!     let messages = client.check_mailbox(login, domain).await?;
//!     for msg in messages {
//!         println!("From: {}, Subject: {}", msg.from, msg.subject);
//!     }
//!
//!     client.close().await;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;

pub use client::{Client, ClientBuilder, split_address};
pub use error::Error;
pub use models::{Attachment, MessageDetail, MessageSummary};

/// Result type alias for mailbox operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
