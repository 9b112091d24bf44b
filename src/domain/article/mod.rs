pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleName};
