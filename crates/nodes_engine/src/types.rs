use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Collection envelope returned by the operator API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodesDocument {
    pub data: Vec<NodeResource>,
}

/// One node resource as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeResource {
    pub id: String,
    pub attributes: NodeAttributes,
}

/// Node attributes. Attributes not listed here are ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeAttributes {
    pub name: String,
    #[serde(rename = "evmChainID")]
    pub evm_chain_id: String,
    /// Creation timestamp. A malformed value fails the whole fetch.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchCompleted {
        result: Result<Vec<NodeResource>, FetchError>,
    },
}

/// Failure surface of the fetch. One request, one outcome; every transport,
/// status, and decoding problem collapses into this error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Cancelled,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "malformed response document"),
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
