/// Path reported for objects the listing carries no name for
/// (commits, trees, blobs never referenced from a tree entry).
pub const NO_NAME: &str = "no-name";

/// A reachable object as emitted by the history listing, in listing order
#[derive(Debug, Clone)]
pub struct ObjectRecord {
    pub id: String,
    pub path: String,
}

/// Size information for one object, keyed by identifier in the size map
#[derive(Debug, Clone)]
pub struct SizeEntry {
    pub kind: String,
    pub size: u64,
}
