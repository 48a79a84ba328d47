pub mod config;
pub mod question;
pub mod report;

pub use config::ReqlensConfig;
pub use question::{AnsweredQuestion, ClarifyingQuestion, ClarifyingQuestions};
pub use report::QualityReport;
