use crate::quiz;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildQuestionError {
    CorrectIndexOutOfRange,
}

pub struct JavaBasicsQuiz {
    quiz: quiz::Quiz,
}

impl JavaBasicsQuiz {
    pub fn new() -> Result<Self, BuildQuestionError> {
        let questions = vec![
            build_question(
                "Qual palavra-chave é usada para definir uma classe em Java?",
                &["class", "struct", "define", "object"],
                0,
            )?,
            build_question(
                "Qual tipo de dado armazena números inteiros?",
                &["int", "double", "String", "boolean"],
                1,
            )?,
            build_question(
                "Como se declara um método estático?",
                &[
                    "static void metodo()",
                    "void static metodo()",
                    "method static void()",
                    "void metodo static()",
                ],
                0,
            )?,
            build_question(
                "Qual é o operador de atribuição em Java?",
                &["=", ":=", "==", "<-"],
                0,
            )?,
            build_question(
                "Qual estrutura de controle repete um bloco de código enquanto uma condição é verdadeira?",
                &["while", "if", "switch", "break"],
                0,
            )?,
        ];

        Ok(Self {
            quiz: quiz::Quiz::new(questions),
        })
    }

    pub fn get_quiz(&self) -> &quiz::Quiz {
        &self.quiz
    }
}

fn build_question(
    text: &str,
    options: &[&str],
    correct_index: usize,
) -> Result<quiz::Question, BuildQuestionError> {
    // An out-of-range index is rejected, not clamped
    // The same check rejects an empty options list, since no index is valid for it
    if correct_index >= options.len() {
        return Err(BuildQuestionError::CorrectIndexOutOfRange);
    }

    let alternatives = options
        .iter()
        .enumerate()
        .map(|(i, option)| quiz::Alternative::new(option.to_string(), i == correct_index))
        .collect();

    Ok(quiz::Question::new(text.to_string(), alternatives))
}
