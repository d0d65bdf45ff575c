//! Correlation identifier carried by every request.
//!
//! The active [`TraceId`] lives in Tokio task-local storage for the duration
//! of a request, which lets [`crate::domain::Error`] stamp itself with the id
//! wherever it is built. Task locals do not cross `tokio::spawn`; wrap spawned
//! work in [`TraceId::scope`] again.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

/// Header name used to accept and echo trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";

tokio::task_local! {
    static ACTIVE: TraceId;
}

/// UUID identifying one request across logs, headers and error bodies.
///
/// # Examples
/// ```
/// use users_backend::TraceId;
///
/// let id = TraceId::from_header(" 6f1c8a57-3e6b-4a0c-9d55-0b8f6a4d2e11 ").expect("uuid");
/// assert_eq!(id.to_string(), "6f1c8a57-3e6b-4a0c-9d55-0b8f6a4d2e11");
/// assert!(TraceId::from_header("abc").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random (v4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an inbound header value, tolerating surrounding whitespace.
    #[must_use]
    pub fn from_header(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }

    /// Identifier of the request currently being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        ACTIVE.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the active identifier.
    pub async fn scope<Fut: Future>(trace_id: Self, fut: Fut) -> Fut::Output {
        ACTIVE.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
