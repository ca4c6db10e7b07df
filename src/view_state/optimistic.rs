//! Optimistic updates with rollback.

use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::{ConduitError, ConduitResult};
use crate::shared::Container;

/// Apply a local change now and confirm it with the server later.
///
/// `apply` runs against `target` before this function returns, so listeners
/// see the new value immediately. The returned future awaits `action`; if it
/// fails, `revert` is applied to whatever `target` holds at that point and
/// `on_failure` is called with the error, which is also returned.
///
/// `revert` should restore the exact values `apply` replaced rather than
/// invert them, so a reload that happened in between is not corrupted.
pub fn optimistic<S, T, A, R, F, Fut>(
    target: &Container<S>,
    apply: A,
    revert: R,
    action: Fut,
    on_failure: F,
) -> BoxFuture<'static, ConduitResult<T>>
where
    S: Clone + Send + 'static,
    T: Send + 'static,
    A: FnOnce(&mut S),
    R: FnOnce(&mut S) + Send + 'static,
    F: FnOnce(&ConduitError) + Send + 'static,
    Fut: Future<Output = ConduitResult<T>> + Send + 'static,
{
    target.update(apply);
    confirm(target.clone(), revert, action, on_failure).boxed()
}

/// Await `action`, rolling `target` back with `revert` on failure.
async fn confirm<S, T, R, F, Fut>(
    target: Container<S>,
    revert: R,
    action: Fut,
    on_failure: F,
) -> ConduitResult<T>
where
    S: Clone + Send + 'static,
    R: FnOnce(&mut S),
    F: FnOnce(&ConduitError),
    Fut: Future<Output = ConduitResult<T>>,
{
    match action.await {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!("Optimistic update rolled back: {}", e);
            target.update(revert);
            on_failure(&e);
            Err(e)
        }
    }
}
