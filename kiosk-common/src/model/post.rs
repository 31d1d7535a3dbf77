use serde::{Deserialize, Serialize};

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: Author,
    /// Opaque display string, not a validated calendar date.
    pub date: String,
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

impl Post {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .iter()
            .any(|post_tag| post_tag.eq_ignore_ascii_case(tag))
    }
}
