use serde::{Deserialize, Serialize};

/// Review identifier. Submitted reviews use the millisecond timestamp of
/// their creation, which doubles as a recency key; the built-in seed reviews
/// use fixed string ids. Serialized untagged so the persisted JSON carries
/// plain numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewId {
    Submitted(i64),
    Seed(String),
}

impl ReviewId {
    /// Sort key for the moderation list (newest first). Seed reviews are
    /// never stored, so they only need a stable floor value.
    pub fn recency(&self) -> i64 {
        match self {
            ReviewId::Submitted(ts) => *ts,
            ReviewId::Seed(_) => 0,
        }
    }
}

/// One reader's assessment of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    /// Catalog id of the resource this review belongs to. Rewritten from the
    /// map key when reviews are flattened for moderation.
    #[serde(default)]
    pub resource_id: u32,
    pub name: String,     // Reviewer display name, no identity binding
    pub initials: String, // Avatar initials
    pub color: String,    // Avatar background color
    pub rating: u8,       // 1..=5
    pub text: String,
    pub date: String,     // Human-readable label, e.g. "Feb 2026"
    /// True only for a review added in the current session; drives the entry
    /// animation and is never persisted.
    #[serde(skip)]
    pub is_new: bool,
}
