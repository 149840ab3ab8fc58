use crate::models::domain::{Quiz, ReviewEntry, ScoreResult, UNANSWERED};

/// Scores one attempt against a stored quiz.
///
/// Pure computation: persisting the outcome (counters, attempt records) is
/// the caller's follow-up. Answer input is untrusted and never faults the
/// engine; a missing, null, negative, or out-of-range entry scores the
/// question as unanswered.
pub fn score_quiz(quiz: &Quiz, answers: &[Option<i64>]) -> ScoreResult {
    let total_questions = quiz.questions.len() as u32;
    let mut score: u32 = 0;
    let mut review = Vec::with_capacity(quiz.questions.len());

    for (i, question) in quiz.questions.iter().enumerate() {
        let selected = answers
            .get(i)
            .copied()
            .flatten()
            .and_then(|raw| usize::try_from(raw).ok())
            .filter(|&idx| idx < question.options.len());

        let correct = question.correct_index();
        let is_correct = selected.is_some() && selected == correct;
        if is_correct {
            score += 1;
        }

        review.push(ReviewEntry {
            question_text: question.question_text.clone(),
            user_answer: selected
                .map(|idx| question.options[idx].text.clone())
                .unwrap_or_else(|| UNANSWERED.to_string()),
            correct_answer: correct
                .map(|idx| question.options[idx].text.clone())
                .unwrap_or_default(),
            is_correct,
        });
    }

    let percentage = if total_questions > 0 {
        f64::from(score) / f64::from(total_questions) * 100.0
    } else {
        0.0
    };

    ScoreResult {
        score,
        total_questions,
        percentage,
        review,
    }
}
