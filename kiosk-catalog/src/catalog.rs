use kiosk_common::{
    model::{post::Post, tag::{ALL_TAGS, TagFilter}},
    query::{BlogQuery, BlogQueryResponse, Pagination},
};

// Read-only after construction, so a catalog can be shared freely between
// concurrent readers without locking.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Catalog {
    posts: Vec<Post>,
    tag_filters: Vec<TagFilter>,
}

impl Catalog {
    #[must_use]
    pub fn new(posts: Vec<Post>, tag_filters: Vec<TagFilter>) -> Self {
        Self { posts, tag_filters }
    }

    #[must_use]
    pub fn seeded() -> Self {
        Self::new(crate::seed::posts(), crate::seed::tag_filters())
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn tag_filters(&self) -> &[TagFilter] {
        &self.tag_filters
    }

    // Unknown tags and pages past the end yield an empty page slice,
    // never an error.
    #[must_use]
    pub fn query(&self, query: &BlogQuery) -> BlogQueryResponse {
        let tag_filter = query
            .tag
            .as_deref()
            // "All" is a case-sensitive sentinel, not a real tag.
            .filter(|tag| *tag != ALL_TAGS);

        let matches = |post: &Post| {
            tag_filter.is_none_or(|tag| post.has_tag(tag)) && (!query.featured || post.featured)
        };

        let total_posts = self.posts.iter().filter(|post| matches(post)).count();

        let limit = query.limit.get();
        let page = usize::try_from(query.page.get()).unwrap_or(usize::MAX);
        let total_pages = total_posts.div_ceil(limit);

        // Page and limit come straight from the query string; the skip
        // count saturates so oversized values land past the end instead of
        // overflowing.
        let posts = self
            .posts
            .iter()
            .filter(|post| matches(post))
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .cloned()
            .collect();

        let pagination = Pagination {
            current_page: query.page.get(),
            total_pages,
            total_posts,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
            limit,
        };

        // Featured posts are always drawn from the whole collection, not
        // from the filtered working set.
        let featured = self
            .posts
            .iter()
            .filter(|post| post.featured)
            .cloned()
            .collect();

        BlogQueryResponse {
            posts,
            pagination,
            tag_filters: self.tag_filters.clone(),
            featured,
        }
    }
}
