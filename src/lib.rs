pub mod artifacts;
pub mod career;
pub mod config;
pub mod error;
pub mod gaps;
pub mod http;
pub mod recommend;
pub mod recommender;
pub mod vectorizer;
