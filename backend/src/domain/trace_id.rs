//! Request-scoped trace identifier.
//!
//! The identifier lives in tokio task-local storage, so domain errors and log
//! lines can pick it up without it being passed around. Spawned tasks do not
//! inherit task-locals; wrap them in [`TraceId::scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static TRACE_ID: TraceId;
}

/// UUID correlating one inbound request with its logs and error responses.
///
/// # Examples
/// ```
/// use weather_backend::TraceId;
///
/// let id = TraceId::adopt_or_generate(Some("not-a-uuid"));
/// assert_ne!(id.to_string(), "not-a-uuid");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random identifier.
    #[must_use]
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reuse a caller-supplied identifier when it is a UUID, otherwise mint
    /// a new one.
    #[must_use]
    pub fn adopt_or_generate(candidate: Option<&str>) -> Self {
        candidate
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_else(Self::generate)
    }

    /// The identifier in scope for the running task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` in scope.
    ///
    /// # Examples
    /// ```
    /// use weather_backend::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let id = TraceId::adopt_or_generate(Some("6f9619ff-8b86-d011-b42d-00cf4fc964ff"));
    /// assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut: Future>(trace_id: Self, fut: Fut) -> Fut::Output {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const KNOWN: &str = "6f9619ff-8b86-d011-b42d-00cf4fc964ff";

    #[tokio::test]
    async fn scope_exposes_identifier_and_ends_with_the_future() {
        let id = TraceId::generate();
        assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
        assert!(TraceId::current().is_none());
    }

    #[rstest]
    #[case::exact(KNOWN)]
    #[case::padded(" 6f9619ff-8b86-d011-b42d-00cf4fc964ff ")]
    fn adopts_valid_caller_identifier(#[case] raw: &str) {
        assert_eq!(TraceId::adopt_or_generate(Some(raw)).to_string(), KNOWN);
    }

    #[rstest]
    #[case::absent(None)]
    #[case::garbage(Some("weather-42"))]
    #[case::empty(Some(""))]
    fn generates_when_caller_identifier_is_unusable(#[case] raw: Option<&str>) {
        let id = TraceId::adopt_or_generate(raw);
        assert!(Uuid::parse_str(&id.to_string()).is_ok());
        assert_ne!(Some(id.to_string().as_str()), raw);
    }
}
