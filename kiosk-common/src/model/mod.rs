pub mod post;
pub mod tag;
