//! Entities returned by the 1secmail API.

use serde::{Deserialize, Serialize};

/// Inbox listing entry returned by `check_mailbox`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSummary {
    /// Provider-assigned message id, used to fetch the full message.
    pub id: u64,
    /// Sender address.
    pub from: String,
    /// Message subject line.
    pub subject: String,
    /// Receive timestamp as reported by the provider.
    pub date: String,
}

/// Full message content returned by `fetch_message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDetail {
    pub id: u64,
    pub from: String,
    pub subject: String,
    pub date: String,
    /// Attachment metadata; download is out of scope.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Body the provider considers primary (HTML when present).
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub text_body: String,
    #[serde(default)]
    pub html_body: String,
}

/// Attachment metadata on a [`MessageDetail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub size: u64,
}
