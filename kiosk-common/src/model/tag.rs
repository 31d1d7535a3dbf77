use serde::{Deserialize, Serialize};

/// Tag parameter value that disables tag filtering.
pub const ALL_TAGS: &str = "All";

// The filter catalog is independent of the tags actually present on posts;
// no referential integrity in either direction. The currently selected
// entry is presentation state and not part of this model.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct TagFilter {
    pub id: String,
    pub label: String,
}

impl TagFilter {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
