use std::future::Future;
use std::sync::Mutex;

use tokio::task::AbortHandle;
use tracing::debug;

/// Identifies one dispatch on a [`LatestSlot`]. Only the most recent ticket
/// may write to the slot's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

struct Slot<S> {
    state: S,
    generation: u64,
    in_flight: Option<AbortHandle>,
}

/// A piece of fetch state that is owned by whichever request was dispatched
/// last.
///
/// Starting a new request aborts the task of the previous one. A request that
/// was overtaken resolves to `None` from [`LatestSlot::run`] and its
/// [`LatestSlot::complete`] call is ignored, so an older response can never
/// overwrite a newer one even if it finished just before being aborted.
pub struct LatestSlot<S> {
    inner: Mutex<Slot<S>>,
}

impl<S: Clone + Default> Default for LatestSlot<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Clone> LatestSlot<S> {
    pub fn new(state: S) -> Self {
        Self {
            inner: Mutex::new(Slot {
                state,
                generation: 0,
                in_flight: None,
            }),
        }
    }

    pub fn snapshot(&self) -> S {
        self.inner.lock().unwrap().state.clone()
    }

    /// Cancel whatever is in flight, apply `start` to the state and hand out a
    /// fresh ticket.
    pub fn supersede(&self, start: impl FnOnce(&mut S)) -> Ticket {
        let mut slot = self.inner.lock().unwrap();
        slot.generation += 1;
        if let Some(handle) = slot.in_flight.take() {
            debug!("Aborting superseded request (generation {})", slot.generation - 1);
            handle.abort();
        }
        start(&mut slot.state);
        Ticket(slot.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.inner.lock().unwrap().generation == ticket.0
    }

    /// Run `fut` as an abortable task on behalf of `ticket`.
    ///
    /// Returns `None` when the request was superseded, whether the task was
    /// aborted or completed too late. Cancellation is not an error.
    pub async fn run<T, F>(&self, ticket: Ticket, fut: F) -> Option<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let handle = tokio::spawn(fut);
        {
            let mut slot = self.inner.lock().unwrap();
            if slot.generation != ticket.0 {
                handle.abort();
                return None;
            }
            slot.in_flight = Some(handle.abort_handle());
        }

        match handle.await {
            Ok(value) if self.is_current(ticket) => Some(value),
            Ok(_) => None,
            Err(e) if e.is_cancelled() => None,
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }

    /// Apply `finish` if `ticket` still owns the slot and return the resulting
    /// state; otherwise leave the state untouched and return `None`.
    pub fn complete(&self, ticket: Ticket, finish: impl FnOnce(&mut S)) -> Option<S> {
        let mut slot = self.inner.lock().unwrap();
        if slot.generation != ticket.0 {
            return None;
        }
        slot.in_flight = None;
        finish(&mut slot.state);
        Some(slot.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_run_returns_value_for_current_ticket() {
        let slot: LatestSlot<Vec<u32>> = LatestSlot::default();
        let ticket = slot.supersede(|_| {});
        let value = slot.run(ticket, async { 7 }).await;
        assert_eq!(value, Some(7));
        assert_eq!(slot.complete(ticket, |s| s.push(7)), Some(vec![7]));
    }

    #[tokio::test]
    async fn test_superseded_run_is_aborted() {
        let slot: Arc<LatestSlot<u32>> = Arc::new(LatestSlot::default());
        let (_tx, rx) = oneshot::channel::<()>();

        let first = slot.supersede(|_| {});
        let runner = {
            let slot = Arc::clone(&slot);
            tokio::spawn(async move {
                slot.run(first, async move {
                    let _ = rx.await;
                    1u32
                })
                .await
            })
        };

        // Let the first request register its task before superseding it.
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second = slot.supersede(|_| {});

        assert_eq!(runner.await.unwrap(), None);
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    #[tokio::test]
    async fn test_stale_complete_is_ignored() {
        let slot: LatestSlot<&'static str> = LatestSlot::new("initial");
        let old = slot.supersede(|_| {});
        let new = slot.supersede(|s| *s = "loading");

        assert_eq!(slot.complete(old, |s| *s = "old result"), None);
        assert_eq!(slot.snapshot(), "loading");
        assert_eq!(slot.complete(new, |s| *s = "new result"), Some("new result"));
    }

    #[tokio::test]
    async fn test_run_with_stale_ticket_does_not_execute() {
        let slot: LatestSlot<u32> = LatestSlot::default();
        let stale = slot.supersede(|_| {});
        let _current = slot.supersede(|_| {});
        assert_eq!(slot.run(stale, async { 1 }).await, None);
    }
}
