pub mod aggregate;

pub use aggregate::{Article, ArticleCreateDto, ArticleUpdateDto};
