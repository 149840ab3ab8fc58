use actix_web::web;

pub mod quiz_handler;

pub use quiz_handler::{
    create_quiz, delete_quiz, generate_quizzes, get_quiz, get_quiz_answers, health_check,
    health_check_ready, list_attempts, list_my_quizzes, list_quizzes, submit_quiz, update_quiz,
};

/// Registers the full route set. Fixed-path quiz routes come before the
/// `{id}` routes so "mine" and "generate" are not taken for identifiers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(quiz_handler::health_check)
        .service(quiz_handler::health_check_ready)
        .service(quiz_handler::generate_quizzes)
        .service(quiz_handler::list_my_quizzes)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::get_quiz_answers)
        .service(quiz_handler::submit_quiz)
        .service(quiz_handler::get_quiz)
        .service(quiz_handler::update_quiz)
        .service(quiz_handler::delete_quiz)
        .service(quiz_handler::list_attempts);
}
