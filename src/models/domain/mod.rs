pub mod keyword_set;
pub mod quiz;
pub mod quiz_question;
pub mod video;

pub use keyword_set::KeywordSet;
pub use quiz::Quiz;
pub use quiz_question::{QuizLevel, QuizQuestion, QuizQuestionOption, QuizQuestionType};
pub use video::VideoResult;
