use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single generated quiz question. The model is instructed to fill every
/// field, but replies routinely omit the optional ones, so everything except
/// the statement, type and level is defaulted rather than rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(default = "generated_question_id")]
    pub question_id: String,
    #[serde(rename = "type")]
    pub question_type: QuizQuestionType,
    pub level: QuizLevel,
    pub question: String,
    /// Present only for types where options apply; empty for
    /// `fill_in_blank`/`short_answer`, whose accepted answers live in
    /// `correct_answers`.
    #[serde(default)]
    pub options: Vec<QuizQuestionOption>,
    #[serde(default)]
    pub correct_answers: Vec<String>,
    #[serde(default)]
    pub guidance_on_error: String,
    #[serde(default)]
    pub guidance_on_success: String,
    #[serde(default)]
    pub times_used: i64,
    #[serde(default = "draft_status")]
    pub status: String,
    /// Type-specific payload (matching pairs, ordering sequence, reference
    /// text for blanks). Passed through untouched.
    #[serde(default)]
    pub extra: serde_json::Value,
}

fn generated_question_id() -> String {
    Uuid::new_v4().to_string()
}

fn draft_status() -> String {
    "draft".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestionOption {
    #[serde(default)]
    pub label: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizQuestionType {
    MultipleChoice,
    MultipleSelect,
    TrueFalse,
    FillInBlank,
    Matching,
    Ordering,
    ShortAnswer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizLevel {
    Basic,
    Intermediate,
    Advanced,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_round_trip_serialization() {
        let variants = [
            QuizQuestionType::MultipleChoice,
            QuizQuestionType::MultipleSelect,
            QuizQuestionType::TrueFalse,
            QuizQuestionType::FillInBlank,
            QuizQuestionType::Matching,
            QuizQuestionType::Ordering,
            QuizQuestionType::ShortAnswer,
        ];

        for variant in variants {
            let json = serde_json::to_string(&variant).expect("variant should serialize");
            let parsed: QuizQuestionType =
                serde_json::from_str(&json).expect("variant should deserialize");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn question_type_uses_snake_case_wire_form() {
        let json = serde_json::to_string(&QuizQuestionType::FillInBlank).unwrap();
        assert_eq!(json, "\"fill_in_blank\"");
    }

    #[test]
    fn question_type_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<QuizQuestionType>("\"essay\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn question_defaults_applied_for_missing_fields() {
        let json = r#"{
            "type": "short_answer",
            "level": "basic",
            "question": "What keyword declares an immutable binding?"
        }"#;

        let question: QuizQuestion = serde_json::from_str(json).expect("lenient parse");

        assert!(!question.question_id.is_empty());
        assert!(question.options.is_empty());
        assert!(question.correct_answers.is_empty());
        assert_eq!(question.times_used, 0);
        assert_eq!(question.status, "draft");
        assert!(question.extra.is_null());
    }

    #[test]
    fn question_keeps_provided_fields() {
        let json = r#"{
            "question_id": "q-7",
            "type": "multiple_choice",
            "level": "intermediate",
            "question": "Which loop runs at least once?",
            "options": [
                {"label": "A", "text": "while", "is_correct": false, "explanation": "Checks first."},
                {"label": "B", "text": "do-while", "is_correct": true, "explanation": "Checks after."}
            ],
            "correct_answers": ["B"],
            "guidance_on_error": "Review loop entry conditions.",
            "guidance_on_success": "Look into loop invariants next.",
            "times_used": 2,
            "status": "published",
            "extra": {"topic": "loops"}
        }"#;

        let question: QuizQuestion = serde_json::from_str(json).expect("full parse");

        assert_eq!(question.question_id, "q-7");
        assert_eq!(question.question_type, QuizQuestionType::MultipleChoice);
        assert_eq!(question.level, QuizLevel::Intermediate);
        assert_eq!(question.options.len(), 2);
        assert!(question.options[1].is_correct);
        assert_eq!(question.correct_answers, vec!["B"]);
        assert_eq!(question.times_used, 2);
        assert_eq!(question.status, "published");
        assert_eq!(question.extra["topic"], "loops");
    }
}
