//! Query cache
//!
//! Every read against the backend goes through a [`QueryCell`]:
//!
//! - a value younger than the stale time is served from memory;
//! - a read that arrives while the same query is already in flight awaits that
//!   request instead of issuing a second one;
//! - failures are returned to every waiter and never cached;
//! - invalidation drops the value and detaches the in-flight request, whose result
//!   is then handed to its waiters but never written back.
//!
//! Values are only refreshed on read; there is no background refetch.

use std::fmt;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use site_console_provider::ProvisioningError;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Default freshness window for cached reads.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60);

/// Identifies one cached backend read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    IsPublished,
    Subdomain,
    Domain,
}

impl QueryKey {
    /// Every key, in the order they are fetched.
    pub const ALL: [Self; 3] = [Self::IsPublished, Self::Subdomain, Self::Domain];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsPublished => "isPublished",
            Self::Subdomain => "subdomain",
            Self::Domain => "domain",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type QueryResult<T> = Result<T, ProvisioningError>;
type SharedFetch<T> = Shared<BoxFuture<'static, QueryResult<T>>>;

struct CellState<T> {
    value: Option<(T, Instant)>,
    in_flight: Option<(u64, SharedFetch<T>)>,
    next_fetch_id: u64,
}

/// Cache slot for a single query.
pub struct QueryCell<T> {
    key: QueryKey,
    stale_time: Duration,
    state: Mutex<CellState<T>>,
}

impl<T> QueryCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(key: QueryKey, stale_time: Duration) -> Self {
        Self {
            key,
            stale_time,
            state: Mutex::new(CellState {
                value: None,
                in_flight: None,
                next_fetch_id: 0,
            }),
        }
    }

    pub fn key(&self) -> QueryKey {
        self.key
    }

    /// Return the cached value if it is still fresh, otherwise join or start a fetch.
    ///
    /// `fetcher` is only called when a new request has to be issued.
    pub async fn fetch<F>(&self, fetcher: F) -> QueryResult<T>
    where
        F: FnOnce() -> BoxFuture<'static, QueryResult<T>>,
    {
        let (fetch_id, request) = {
            let mut state = self.state.lock().await;

            if let Some((value, fetched_at)) = &state.value {
                if fetched_at.elapsed() < self.stale_time {
                    log::trace!("query {} served from cache", self.key);
                    return Ok(value.clone());
                }
            }

            if let Some((fetch_id, request)) = state.in_flight.clone() {
                log::trace!("query {} joined in-flight fetch #{fetch_id}", self.key);
                (fetch_id, request)
            } else {
                let fetch_id = state.next_fetch_id;
                state.next_fetch_id += 1;
                let request = fetcher().shared();
                state.in_flight = Some((fetch_id, request.clone()));
                log::debug!("query {} fetching (#{fetch_id})", self.key);
                (fetch_id, request)
            }
        };

        let result = request.await;

        let mut state = self.state.lock().await;
        let still_current = matches!(&state.in_flight, Some((current, _)) if *current == fetch_id);
        if still_current {
            state.in_flight = None;
            if let Ok(value) = &result {
                state.value = Some((value.clone(), Instant::now()));
            }
        } else if result.is_ok() && state.value.is_none() {
            log::debug!(
                "query {} fetch #{fetch_id} finished after invalidation, result not cached",
                self.key
            );
        }

        result
    }

    /// Drop the cached value and detach any in-flight request.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        state.value = None;
        state.in_flight = None;
        log::debug!("query {} invalidated", self.key);
    }

    /// Last successfully fetched value, fresh or not.
    pub async fn peek(&self) -> Option<T> {
        self.state
            .lock()
            .await
            .value
            .as_ref()
            .map(|(value, _)| value.clone())
    }

    /// Whether a read right now would be answered from memory.
    pub async fn is_fresh(&self) -> bool {
        self.state
            .lock()
            .await
            .value
            .as_ref()
            .is_some_and(|(_, fetched_at)| fetched_at.elapsed() < self.stale_time)
    }

    /// Whether a request for this query is currently outstanding.
    pub async fn is_fetching(&self) -> bool {
        self.state.lock().await.in_flight.is_some()
    }
}

/// The three cached reads the console performs.
pub struct QueryClient {
    stale_time: Duration,
    pub is_published: QueryCell<bool>,
    pub subdomain: QueryCell<Option<String>>,
    pub domain: QueryCell<Option<String>>,
}

impl QueryClient {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            is_published: QueryCell::new(QueryKey::IsPublished, stale_time),
            subdomain: QueryCell::new(QueryKey::Subdomain, stale_time),
            domain: QueryCell::new(QueryKey::Domain, stale_time),
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    pub async fn invalidate(&self, keys: &[QueryKey]) {
        for key in keys {
            match key {
                QueryKey::IsPublished => self.is_published.invalidate().await,
                QueryKey::Subdomain => self.subdomain.invalidate().await,
                QueryKey::Domain => self.domain.invalidate().await,
            }
        }
    }

    pub async fn invalidate_all(&self) {
        self.invalidate(&QueryKey::ALL).await;
    }

    pub async fn is_fresh(&self, key: QueryKey) -> bool {
        match key {
            QueryKey::IsPublished => self.is_published.is_fresh().await,
            QueryKey::Subdomain => self.subdomain.is_fresh().await,
            QueryKey::Domain => self.domain.is_fresh().await,
        }
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME)
    }
}
