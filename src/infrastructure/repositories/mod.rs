// src/infrastructure/repositories/mod.rs
mod postgres_article;

pub use postgres_article::PostgresArticleRepository;
