//! View lifetime guard
//!
//! A fetch started by a view may finish after the view is gone, or after a
//! newer reload has started. Each fetch carries a [`FetchTicket`]; its result
//! is applied only while the ticket is live.

use std::future::Future;
use std::pin::pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_util::future::{select, Either};
use tokio_util::sync::CancellationToken;

#[derive(Clone, Default)]
pub struct ViewLifetime {
    token: CancellationToken,
    epoch: Arc<AtomicU64>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for the current epoch (initial mount fetches)
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            token: self.token.clone(),
            epoch: Some(self.epoch.clone()),
            issued: self.epoch.load(Ordering::Acquire),
        }
    }

    /// Ticket that outlives reloads and dies only with the view
    pub fn view_ticket(&self) -> FetchTicket {
        FetchTicket {
            token: self.token.clone(),
            epoch: None,
            issued: 0,
        }
    }

    /// Start a new epoch; tickets from earlier epochs stop being live
    pub fn next_epoch(&self) -> FetchTicket {
        let issued = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        FetchTicket {
            token: self.token.clone(),
            epoch: Some(self.epoch.clone()),
            issued,
        }
    }

    /// End the view; no ticket is live afterwards
    pub fn end(&self) {
        self.token.cancel();
    }

    pub fn is_ended(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Clone)]
pub struct FetchTicket {
    token: CancellationToken,
    epoch: Option<Arc<AtomicU64>>,
    issued: u64,
}

impl FetchTicket {
    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
            && self
                .epoch
                .as_ref()
                .map_or(true, |epoch| epoch.load(Ordering::Acquire) == self.issued)
    }

    /// Resolves when the owning view ends
    pub async fn ended(&self) {
        self.token.cancelled().await;
    }

    /// Drive `work` until it finishes or the view ends.
    ///
    /// Returns the output only if the ticket is still live when `work`
    /// completes; work still pending when the view ends is dropped.
    pub async fn settle<F: Future>(&self, work: F) -> Option<F::Output> {
        let work = pin!(work);
        let ended = pin!(self.ended());
        match select(work, ended).await {
            Either::Left((output, _)) => self.is_live().then_some(output),
            Either::Right(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_dies_with_view() {
        let lifetime = ViewLifetime::new();
        let ticket = lifetime.ticket();
        assert!(ticket.is_live());

        lifetime.end();
        assert!(!ticket.is_live());
        assert!(lifetime.is_ended());
    }

    #[test]
    fn newer_epoch_supersedes_older_tickets() {
        let lifetime = ViewLifetime::new();
        let mount = lifetime.ticket();
        let first_reload = lifetime.next_epoch();
        let second_reload = lifetime.next_epoch();

        assert!(!mount.is_live());
        assert!(!first_reload.is_live());
        assert!(second_reload.is_live());
        assert!(lifetime.ticket().is_live());
    }

    #[test]
    fn view_ticket_survives_reloads_but_not_the_view() {
        let lifetime = ViewLifetime::new();
        let ticket = lifetime.view_ticket();
        lifetime.next_epoch();
        assert!(ticket.is_live());

        lifetime.end();
        assert!(!ticket.is_live());
    }

    #[tokio::test]
    async fn ended_resolves_after_end() {
        let lifetime = ViewLifetime::new();
        let ticket = lifetime.ticket();
        lifetime.end();
        ticket.ended().await;
    }

    #[tokio::test]
    async fn settle_returns_output_for_live_ticket() {
        let lifetime = ViewLifetime::new();
        let ticket = lifetime.ticket();
        assert_eq!(ticket.settle(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn settle_drops_pending_work_when_view_ends() {
        let lifetime = ViewLifetime::new();
        let ticket = lifetime.ticket();
        let ender = lifetime.clone();
        let handle = tokio::spawn(async move {
            ticket
                .settle(futures_util::future::pending::<u32>())
                .await
        });
        tokio::task::yield_now().await;
        ender.end();
        assert_eq!(handle.await.unwrap(), None);
    }

    #[tokio::test]
    async fn settle_discards_superseded_results() {
        let lifetime = ViewLifetime::new();
        let stale = lifetime.ticket();
        lifetime.next_epoch();
        assert_eq!(stale.settle(async { "old" }).await, None);
    }
}
