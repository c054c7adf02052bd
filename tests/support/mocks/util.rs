// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;
use vertical_articles::application::ports::util::IdGenerator;

/// Yields `00000000-0000-0000-0000-000000000001`, then `...02`, and so on.
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::SeqCst)) + 1)
    }
}

/// Always returns the same id, for exercising duplicate-key handling.
pub struct ConstantIds(pub Uuid);

impl IdGenerator for ConstantIds {
    fn generate(&self) -> Uuid {
        self.0
    }
}
