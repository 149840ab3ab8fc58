/// Builds the natural-language instruction sent to the generative model for
/// one topic. The requested shape matches [`QuizCandidate`]; the model's
/// compliance is never assumed, the authoring validation gate enforces
/// the contract.
///
/// [`QuizCandidate`]: crate::models::dto::QuizCandidate
pub fn quiz_generation_prompt(topic: &str, question_count: u32, difficulty: &str) -> String {
    format!(
        r#"Generate a {difficulty_lower} difficulty quiz about {topic} with {question_count} multiple-choice questions.
Provide the response in the following strict JSON format:
{{
  "title": "{topic} Quiz",
  "description": "A {difficulty_lower} difficulty quiz on {topic} with {question_count} questions.",
  "questions": [
    {{
      "questionText": "Question text",
      "options": [
        {{"text": "Option 1", "isCorrect": false}},
        {{"text": "Option 2", "isCorrect": true}},
        {{"text": "Option 3", "isCorrect": false}},
        {{"text": "Option 4", "isCorrect": false}}
      ]
    }}
  ]
}}
Ensure: Exactly {question_count} questions, 4 options per question, one correct answer per question. Vary which option is correct. Wrap the JSON in ```json ... ```."#,
        topic = topic,
        question_count = question_count,
        difficulty_lower = difficulty.to_lowercase(),
    )
}
