use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request counter. Each async request takes a ticket; only the
/// holder of the latest ticket may publish its result.
#[derive(Clone, Debug, Default)]
pub struct Generation(Arc<AtomicU64>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a new request, invalidating every earlier ticket.
	pub fn advance(&self) -> Ticket {
		Ticket(self.0.fetch_add(1, Ordering::Relaxed) + 1)
	}

	pub fn is_current(&self, ticket: Ticket) -> bool {
		self.0.load(Ordering::Relaxed) == ticket.0
	}
}
