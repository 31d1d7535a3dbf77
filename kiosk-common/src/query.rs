use crate::{
    model::{post::Post, tag::TagFilter},
    page::{PageLimit, PageNumber},
};
use serde::{Deserialize, Serialize};

// All-optional strings so that extraction from the query string never
// rejects; validation happens in BlogQuery::from_raw.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
pub struct RawBlogQuery {
    pub tag: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub featured: Option<String>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct BlogQuery {
    pub tag: Option<String>,
    pub page: PageNumber,
    pub limit: PageLimit,
    pub featured: bool,
}

impl BlogQuery {
    // Permissive by contract: non-numeric, zero or negative page/limit
    // fall back to the defaults, and featured is set only by the literal
    // string "true".
    #[must_use]
    pub fn from_raw(raw: RawBlogQuery) -> Self {
        let page = raw
            .page
            .and_then(|page| page.parse().ok())
            .and_then(PageNumber::new)
            .unwrap_or_default();
        let limit = raw
            .limit
            .and_then(|limit| limit.parse().ok())
            .and_then(PageLimit::new)
            .unwrap_or_default();
        let featured = raw.featured.as_deref() == Some("true");

        Self {
            tag: raw.tag,
            page,
            limit,
            featured,
        }
    }
}

impl From<RawBlogQuery> for BlogQuery {
    fn from(value: RawBlogQuery) -> Self {
        Self::from_raw(value)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    /// 0 when no posts match the query. A default `current_page` of 1 is
    /// then larger than `total_pages`; that is not an error state, both
    /// page flags are simply false.
    pub total_pages: usize,
    pub total_posts: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: usize,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogQueryResponse {
    pub posts: Vec<Post>,
    pub pagination: Pagination,
    pub tag_filters: Vec<TagFilter>,
    /// Always drawn from the whole collection, regardless of the query's
    /// filter and pagination parameters.
    pub featured: Vec<Post>,
}
