use uuid::Uuid;

/// Identity source for new plants. Values must stay unique for the lifetime
/// of the owning collection; the algorithm is otherwise unconstrained.
pub trait IdSource: Send + Sync {
    fn make_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn make_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
