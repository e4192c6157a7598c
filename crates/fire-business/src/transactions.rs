//! Time window for the filtered transaction search.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Default span of a transaction search: 15 minutes.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(900_000);

/// The date range of a filtered transaction search.
///
/// A missing end means "now"; a missing start means `span` before the end.
///
/// # Example
///
/// ```
/// use fire_business::TransactionWindow;
///
/// let window = TransactionWindow::default();
/// assert_eq!(window.resolve(1_000_000), (100_000, 1_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionWindow {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub span: Duration,
}

impl Default for TransactionWindow {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            span: DEFAULT_WINDOW,
        }
    }
}

impl TransactionWindow {
    /// A window covering the last `span` up to now.
    pub fn last(span: Duration) -> Self {
        Self {
            span,
            ..Self::default()
        }
    }

    /// An explicit window.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    /// Set the end of the window.
    pub fn ending_at(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    /// Set the start of the window.
    pub fn starting_at(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    /// Resolve the window into `(from_ms, to_ms)` given the current time.
    pub fn resolve(&self, now_ms: i64) -> (i64, i64) {
        let to_ms = self.to.map_or(now_ms, |to| to.timestamp_millis());
        let span_ms = i64::try_from(self.span.as_millis()).unwrap_or(i64::MAX);
        let from_ms = self
            .from
            .map_or(to_ms.saturating_sub(span_ms), |from| from.timestamp_millis());
        (from_ms, to_ms)
    }
}
