//! Headline retrieval with LLM summaries and lightweight claim fact-checking.
//!
//! A run goes router → summary → claim extraction → verification → scoring,
//! with every provider injected through the traits in [`pipeline::traits`].

pub mod config;
pub mod guard;
pub mod models;
pub mod pipeline;
pub mod render;

pub use config::{AppConfig, ConfigError};
pub use guard::{validate_query, QueryError};
pub use models::{
    ArticleRecord, Category, Claim, Confidence, CredibilityReport, NewsReport,
    VerificationResult, VerificationSource,
};
pub use pipeline::{NewsDesk, NewsRequest};
