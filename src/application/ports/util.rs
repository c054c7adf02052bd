// src/application/ports/util.rs
use uuid::Uuid;

/// Source of fresh article ids. Implementations must never hand out the nil
/// UUID and should not repeat ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}
