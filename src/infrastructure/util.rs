use crate::application::ports::util::IdGenerator;
use uuid::Uuid;

/// Random (v4) ids.
#[derive(Default, Clone)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
