use uuid::Uuid;

/// Source of opaque, creation-ordered identifiers for new records.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// UUIDv7 generator: globally unique and lexicographically sortable by creation time.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeOrderedIds;

impl IdGenerator for TimeOrderedIds {
    fn next_id(&self) -> String {
        Uuid::now_v7().simple().to_string()
    }
}
