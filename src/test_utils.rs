#[cfg(test)]
pub mod fixtures {
    use chrono::Utc;

    use crate::models::domain::{AnswerOption, Question, Quiz};
    use crate::models::dto::{OptionCandidate, QuestionCandidate, QuizCandidate};

    fn four_options(correct: usize) -> Vec<AnswerOption> {
        ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, text)| AnswerOption {
                text: text.to_string(),
                is_correct: i == correct,
            })
            .collect()
    }

    /// Two questions with options A-D; option 1 is correct for Q1 and
    /// option 3 for Q2.
    pub fn two_question_quiz() -> Quiz {
        quiz_with_questions(vec![
            Question {
                question_text: "First question".to_string(),
                options: four_options(1),
            },
            Question {
                question_text: "Second question".to_string(),
                options: four_options(3),
            },
        ])
    }

    pub fn quiz_with_questions(questions: Vec<Question>) -> Quiz {
        Quiz {
            id: "quiz-1".to_string(),
            title: "Sample Quiz".to_string(),
            description: "A quiz for tests".to_string(),
            questions,
            category: "General".to_string(),
            difficulty: "Medium".to_string(),
            creator_id: "user-1".to_string(),
            times_taken: 0,
            highest_score: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Pre-validation candidate matching [`two_question_quiz`].
    pub fn candidate() -> QuizCandidate {
        let four = |correct: usize| {
            ["A", "B", "C", "D"]
                .iter()
                .enumerate()
                .map(|(i, text)| OptionCandidate {
                    text: text.to_string(),
                    is_correct: i == correct,
                })
                .collect()
        };

        QuizCandidate {
            title: "Sample Quiz".to_string(),
            description: "A quiz for tests".to_string(),
            questions: vec![
                QuestionCandidate {
                    question_text: "First question".to_string(),
                    options: four(1),
                },
                QuestionCandidate {
                    question_text: "Second question".to_string(),
                    options: four(3),
                },
            ],
            category: "General".to_string(),
            difficulty: "Medium".to_string(),
            times_taken: None,
            highest_score: None,
            created_at: None,
        }
    }

    /// A well-formed model response for the given topic, fenced the way the
    /// generation prompt requests.
    pub fn generated_response(topic: &str) -> String {
        let payload = serde_json::json!({
            "title": format!("{} Quiz", topic),
            "description": format!("A quiz on {}.", topic),
            "questions": [
                {
                    "questionText": format!("What is {} known for?", topic),
                    "options": [
                        {"text": "First", "isCorrect": false},
                        {"text": "Second", "isCorrect": true},
                        {"text": "Third", "isCorrect": false},
                        {"text": "Fourth", "isCorrect": false}
                    ]
                },
                {
                    "questionText": format!("Pick the right fact about {}.", topic),
                    "options": [
                        {"text": "Alpha", "isCorrect": true},
                        {"text": "Beta", "isCorrect": false}
                    ]
                }
            ]
        });

        format!("Here you go!\n```json\n{}\n```", payload)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_two_question_quiz_shape() {
        let quiz = two_question_quiz();
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].correct_index(), Some(1));
        assert_eq!(quiz.questions[1].correct_index(), Some(3));
    }

    #[test]
    fn test_candidate_matches_quiz_fixture() {
        let quiz = candidate().into_quiz("user-1").expect("fixture is valid");
        assert_eq!(quiz.title, two_question_quiz().title);
        assert_eq!(quiz.questions.len(), 2);
    }

    #[test]
    fn test_generated_response_is_extractable() {
        let raw = generated_response("Rust");
        assert!(raw.contains("```json"));
    }
}
