pub mod desk;
pub mod encyclopedia;
pub mod extractor;
pub mod llm;
pub mod mock;
pub mod news_api;
pub mod router;
pub mod scorer;
pub mod static_articles;
pub mod summarize;
pub mod traits;
pub mod verifier;

pub use desk::{NewsDesk, NewsRequest};
pub use encyclopedia::WikipediaClient;
pub use extractor::ClaimExtractor;
pub use llm::LlmGenerator;
pub use mock::{EmptyNewsProvider, OfflineGenerator};
pub use news_api::NewsApiClient;
pub use router::ArticleRouter;
pub use traits::{Encyclopedia, NewsProvider, TextGenerator};
pub use verifier::{ClaimVerifier, VerificationMethod};
