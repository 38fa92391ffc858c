pub mod article;
pub mod category;
pub mod claim;
pub mod region;
pub mod report;
pub mod verify;

pub use article::{records_from_raw, ArticleRecord, RawArticle, RawSource};
pub use category::{Category, UnknownCategory};
pub use claim::Claim;
pub use region::{profile_for, RegionProfile, DEFAULT_PROFILE};
pub use report::{CredibilityReport, NewsReport, RetrievalStrategy};
pub use verify::{Confidence, VerificationResult, VerificationSource};
