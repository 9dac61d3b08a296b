//! RequestTracker - ordering of overlapping requests by issue order.
//!
//! One tracker covers every writer of a stored slot. A ticket is current
//! only while no later ticket has been issued, so a slow response to an
//! earlier request can be recognised and dropped even if it completes last.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::foundation::RequestId;

/// Identity of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    sequence: u64,
    id: RequestId,
}

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn id(&self) -> RequestId {
        self.id
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
    commit: Mutex<()>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier ticket.
    pub fn issue(&self) -> RequestTicket {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            sequence,
            id: RequestId::new(),
        }
    }

    /// True while no newer ticket exists.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.sequence
    }

    /// Takes the commit lock for `ticket`. Returns `None` once the ticket is
    /// superseded; otherwise the guard must be held across every write.
    pub async fn claim(&self, ticket: &RequestTicket) -> Option<MutexGuard<'_, ()>> {
        let guard = self.commit.lock().await;
        self.is_current(ticket).then_some(guard)
    }
}
