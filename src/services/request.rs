//! Cancellable request scopes
//!
//! Each service owns a `RequestScope`. Requests started through it can be
//! aborted together with `cancel_pending`, after which the scope keeps
//! accepting new requests. `close` (also run on drop) aborts them and
//! refuses anything started later. An aborted request resolves to
//! `PortalError::Cancelled` and its result is never applied.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{AbortHandle, Abortable, Aborted};
use tracing::debug;

use crate::utils::errors::{PortalError, Result};

#[derive(Debug, Default)]
struct Handles {
    closed: bool,
    active: HashMap<u64, AbortHandle>,
}

#[derive(Debug, Default)]
struct ScopeInner {
    next_id: AtomicU64,
    handles: Mutex<Handles>,
}

impl ScopeInner {
    fn handles(&self) -> MutexGuard<'_, Handles> {
        self.handles.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn register(&self, handle: AbortHandle) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut handles = self.handles();
        if handles.closed {
            handle.abort();
        } else {
            handles.active.insert(id, handle);
        }
        id
    }

    fn release(&self, id: u64) {
        self.handles().active.remove(&id);
    }
}

#[derive(Debug, Default)]
pub struct RequestScope {
    inner: Arc<ScopeInner>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `request` inside this scope.
    ///
    /// The returned future does not borrow the scope, so the scope may be
    /// cancelled or dropped while it is pending.
    pub fn run<F, T>(&self, request: F) -> impl Future<Output = Result<T>>
    where
        F: Future<Output = Result<T>>,
    {
        let inner = Arc::clone(&self.inner);
        async move {
            let (handle, registration) = AbortHandle::new_pair();
            let id = inner.register(handle);
            let outcome = Abortable::new(request, registration).await;
            inner.release(id);

            match outcome {
                Ok(result) => result,
                Err(Aborted) => Err(PortalError::Cancelled),
            }
        }
    }

    /// Abort everything in flight; later requests run normally
    pub fn cancel_pending(&self) {
        abort_active(&mut self.inner.handles());
    }

    /// Abort everything in flight and refuse new requests
    pub fn close(&self) {
        let mut handles = self.inner.handles();
        handles.closed = true;
        abort_active(&mut handles);
    }

    pub fn is_closed(&self) -> bool {
        self.inner.handles().closed
    }

    /// Number of requests currently in flight
    pub fn pending(&self) -> usize {
        self.inner.handles().active.len()
    }
}

fn abort_active(handles: &mut Handles) {
    let pending = handles.active.len();
    for (_, handle) in handles.active.drain() {
        handle.abort();
    }
    if pending > 0 {
        debug!(pending = pending, "Cancelled in-flight requests");
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::time::Duration;

    #[tokio::test]
    async fn test_completed_request_passes_through() {
        let scope = RequestScope::new();
        let value = scope.run(async { Ok::<_, PortalError>(7) }).await.unwrap();
        assert_eq!(value, 7);
        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test]
    async fn test_cancel_aborts_pending_request() {
        let scope = RequestScope::new();
        let pending = tokio::spawn(scope.run(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, PortalError>(())
        }));

        while scope.pending() == 0 {
            tokio::task::yield_now().await;
        }
        scope.cancel_pending();

        assert_matches!(pending.await.unwrap(), Err(PortalError::Cancelled));
        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test]
    async fn test_scope_accepts_requests_after_cancel_pending() {
        let scope = RequestScope::new();
        scope.cancel_pending();

        assert!(!scope.is_closed());
        let value = scope.run(async { Ok::<_, PortalError>(3) }).await.unwrap();
        assert_eq!(value, 3);
    }

    #[tokio::test]
    async fn test_dropping_scope_aborts_pending_request() {
        let scope = RequestScope::new();
        let request = scope.run(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, PortalError>(())
        });
        let pending = tokio::spawn(request);
        tokio::task::yield_now().await;

        drop(scope);
        assert_matches!(pending.await.unwrap(), Err(PortalError::Cancelled));
    }

    #[tokio::test]
    async fn test_closed_scope_rejects_new_requests() {
        let scope = RequestScope::new();
        scope.close();
        assert!(scope.is_closed());
        let result = scope.run(async { Ok::<_, PortalError>(1) }).await;
        assert_matches!(result, Err(PortalError::Cancelled));
    }
}
