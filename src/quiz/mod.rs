pub mod java_basics;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub text: String,
    pub alternatives: Vec<Alternative>,
}
impl Question {
    pub fn new(text: String, alternatives: Vec<Alternative>) -> Self {
        Self { text, alternatives }
    }

    pub fn correct_alternative(&self) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.is_correct)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Alternative {
    pub text: String,
    pub is_correct: bool,
}
impl Alternative {
    pub fn new(text: String, is_correct: bool) -> Self {
        Self { text, is_correct }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question::new(
            "Quanto é 2 + 2?".to_string(),
            vec![
                Alternative::new("4".to_string(), true),
                Alternative::new("5".to_string(), false),
            ],
        )
    }

    #[test]
    fn correct_alternative_finds_the_flagged_option() {
        let question = sample_question();
        assert_eq!(question.correct_alternative().unwrap().text, "4");
    }

    #[test]
    fn correct_alternative_is_none_when_nothing_is_flagged() {
        let question = Question::new(
            "Quanto é 2 + 2?".to_string(),
            vec![Alternative::new("5".to_string(), false)],
        );
        assert!(question.correct_alternative().is_none());
    }

    #[test]
    fn question_serializes_with_its_field_names() {
        let json = serde_json::to_value(sample_question()).unwrap();
        assert_eq!(json["text"], "Quanto é 2 + 2?");
        assert_eq!(json["alternatives"][0]["text"], "4");
        assert_eq!(json["alternatives"][0]["is_correct"], true);
        assert_eq!(json["alternatives"][1]["is_correct"], false);
    }
}
