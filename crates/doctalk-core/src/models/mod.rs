pub mod category;
pub mod result;
pub mod risk;
pub mod user;

pub use category::QuestionCategory;
pub use result::{CategoryScore, CategoryScores, QuizResult};
pub use risk::RiskTier;
pub use user::UserId;
