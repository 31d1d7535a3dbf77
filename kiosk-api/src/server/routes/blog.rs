use crate::server::{ServerError, ServerRouter, json::Json};
use axum::extract::{Query, State};
use axum_extra::{
    extract::WithRejection,
    routing::{RouterExt, TypedPath},
};
use kiosk_catalog::catalog::Catalog;
use kiosk_common::query::{BlogQuery, BlogQueryResponse, RawBlogQuery};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_get(get_blog)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/blog")]
struct BlogPath();

async fn get_blog(
    BlogPath(): BlogPath,
    State(catalog): State<Arc<Catalog>>,
    WithRejection(Query(raw), _): WithRejection<Query<RawBlogQuery>, ServerError>,
) -> Json<BlogQueryResponse> {
    Json(catalog.query(&BlogQuery::from_raw(raw)))
}

#[cfg(test)]
mod tests {
    use super::BlogPath;
    use axum_extra::routing::TypedPath;
    use kiosk_catalog::catalog::Catalog;
    use kiosk_common::query::{BlogQuery, RawBlogQuery};

    #[test]
    fn path_is_stable() {
        assert_eq!(BlogPath::PATH, "/api/blog");
    }

    #[test]
    fn response_envelope_matches_consumer_contract() {
        let catalog = Catalog::seeded();
        let response = catalog.query(&BlogQuery::from_raw(RawBlogQuery::default()));

        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["featured", "pagination", "posts", "tagFilters"]);

        let pagination = object["pagination"].as_object().unwrap();
        for key in [
            "currentPage",
            "totalPages",
            "totalPosts",
            "hasNextPage",
            "hasPrevPage",
            "limit",
        ] {
            assert!(pagination.contains_key(key), "missing {key}");
        }
    }
}
