use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{GenerateQuizRequest, PagedResponse, PaginationParams, QuizCandidate, SubmitQuizRequest},
};

#[post("/api/quizzes")]
async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizCandidate>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .create_quiz(request.into_inner(), auth.user_id())
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/api/quizzes")]
async fn list_quizzes(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    query.validate()?;
    let (items, total) = state
        .quiz_service
        .list_public(query.offset(), query.limit())
        .await?;
    Ok(HttpResponse::Ok().json(PagedResponse { items, total }))
}

/// Quizzes created by the caller, for the dashboard. Registered before the
/// `{id}` routes so "mine" is not taken for an identifier.
#[get("/api/quizzes/mine")]
async fn list_my_quizzes(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    query.validate()?;
    let (items, total) = state
        .quiz_service
        .list_by_creator(auth.user_id(), query.offset(), query.limit())
        .await?;
    Ok(HttpResponse::Ok().json(PagedResponse { items, total }))
}

/// Take-mode fetch: the answer flags are stripped server-side.
#[get("/api/quizzes/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_public_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

/// Full quiz including answer flags, for the creator's edit flow.
#[get("/api/quizzes/{id}/answers")]
async fn get_quiz_answers(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .get_quiz_for_creator(&id, auth.user_id())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/api/quizzes/{id}")]
async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<QuizCandidate>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(&id, request.into_inner(), auth.user_id())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/api/quizzes/{id}")]
async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&id, auth.user_id()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/api/quizzes/{id}/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state
        .quiz_service
        .submit(&id, auth.user_id(), &request.answers)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/api/quizzes/generate")]
async fn generate_quizzes(
    state: web::Data<AppState>,
    requests: web::Json<Vec<GenerateQuizRequest>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let requests = requests.into_inner();
    for request in &requests {
        request.validate()?;
    }

    let batch = state
        .generator_service
        .generate_batch(requests, auth.user_id())
        .await;
    Ok(HttpResponse::Ok().json(batch))
}

#[get("/api/attempts")]
async fn list_attempts(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    query.validate()?;
    let (items, total) = state
        .quiz_service
        .attempt_history(auth.user_id(), query.offset(), query.limit())
        .await?;
    Ok(HttpResponse::Ok().json(PagedResponse { items, total }))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_health = state.db.health_check().await;

    let response = serde_json::json!({
        "status": if db_health.is_ok() { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn quiz_routes_reject_unauthenticated_requests() {
        use crate::auth::IdentityVerifier;
        use secrecy::SecretString;

        let secret = SecretString::from("test_identity_secret_key".to_string());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(IdentityVerifier::new(&secret)))
                .service(list_quizzes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/quizzes").to_request();
        let resp = test::try_call_service(&app, req).await;

        // Without a bearer token the request never reaches the service.
        assert!(resp.is_err() || !resp.unwrap().status().is_success());
    }
}
