pub mod bundle;
pub mod questionnaire;
pub mod scores;
pub mod trial;
pub mod user;
