use crate::server::ServerRouter;
use axum::Router;

mod blog;

pub fn routes() -> ServerRouter {
    Router::new().merge(blog::routes())
}
