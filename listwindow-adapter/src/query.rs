use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Identifies one dispatched record fetch.
///
/// The host attaches the token to the async work it starts for a query and
/// hands it back with the results; only the token of the latest query is
/// accepted (last-request-wins).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryToken(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    /// No fetch dispatched yet.
    Idle,
    /// The latest query's fetch has not resolved.
    Pending,
    Resolved,
    Failed(String),
}

/// Last-request-wins coordination for async record fetches.
///
/// `set_query` keys a new fetch by the latest query text; results for any
/// earlier query are superseded and dropped silently on arrival. No abort
/// primitive is required: a host that can cancel may simply never deliver a
/// stale result.
pub struct QuerySession<R> {
    query: String,
    generation: u64,
    status: QueryStatus,
    records: Vec<R>,
}

impl<R> Default for QuerySession<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> QuerySession<R> {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            generation: 0,
            status: QueryStatus::Idle,
            records: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == QueryStatus::Pending
    }

    /// Records of the most recently resolved non-superseded fetch.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Updates the live query text. Returns the token for the fetch the host
    /// must dispatch, or `None` when the text did not change.
    ///
    /// Every returned token supersedes all earlier ones.
    pub fn set_query(&mut self, query: &str) -> Option<QueryToken> {
        if self.query == query && self.status != QueryStatus::Idle {
            return None;
        }
        self.query.clear();
        self.query.push_str(query);
        self.generation = self.generation.saturating_add(1);
        self.status = QueryStatus::Pending;
        ladebug!(generation = self.generation, "query fetch dispatched");
        Some(QueryToken(self.generation))
    }

    /// Applies fetched records if `token` still corresponds to the latest
    /// query. Superseded results are dropped and `false` is returned.
    pub fn resolve(&mut self, token: QueryToken, records: Vec<R>) -> bool {
        if token.0 != self.generation {
            latrace!(
                token = token.0,
                generation = self.generation,
                "dropping superseded query results"
            );
            return false;
        }
        self.records = records;
        self.status = QueryStatus::Resolved;
        true
    }

    /// Marks the latest fetch as failed. Superseded failures are dropped.
    ///
    /// The previous record list is kept; failure presentation is the host's
    /// concern (no retries here).
    pub fn fail(&mut self, token: QueryToken, message: impl Into<String>) -> bool {
        if token.0 != self.generation {
            latrace!(
                token = token.0,
                generation = self.generation,
                "dropping superseded query failure"
            );
            return false;
        }
        self.status = QueryStatus::Failed(message.into());
        true
    }
}

impl<R> fmt::Debug for QuerySession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuerySession")
            .field("query", &self.query)
            .field("generation", &self.generation)
            .field("status", &self.status)
            .field("records", &self.records.len())
            .finish()
    }
}
