use actix_web::{get, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{ChatRequest, UpdateQuizConfigRequest, UploadDocumentRequest},
        response::{
            render_transcript, AnswerKeyResponse, ChatResponse, DocumentUploadedResponse,
            QuizResponse, SessionCreatedResponse, SummaryResponse,
        },
    },
};

#[post("/api/sessions")]
pub async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session_id = state.quiz_session_service.create_session().await;
    Ok(HttpResponse::Created().json(SessionCreatedResponse { session_id }))
}

#[put("/api/sessions/{id}/config")]
pub async fn update_config(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<UpdateQuizConfigRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let config = state
        .quiz_session_service
        .update_config(&id, request.into())
        .await?;
    Ok(HttpResponse::Ok().json(config))
}

#[post("/api/sessions/{id}/document")]
pub async fn upload_document(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<UploadDocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let handle = state
        .quiz_session_service
        .upload_document(&id, &request.path, &request.display_name())
        .await?;
    Ok(HttpResponse::Ok().json(DocumentUploadedResponse {
        display_name: handle.display_name,
    }))
}

#[post("/api/sessions/{id}/summarize")]
pub async fn summarize(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let outcome = state.quiz_session_service.summarize(&id).await?;
    Ok(HttpResponse::Ok().json(SummaryResponse::from(outcome)))
}

#[post("/api/sessions/{id}/quizzify")]
pub async fn quizzify(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let outcome = state.quiz_session_service.quizzify(&id).await?;
    Ok(HttpResponse::Ok().json(QuizResponse::from(outcome)))
}

#[post("/api/sessions/{id}/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let reply = state
        .quiz_session_service
        .chat(&id, &request.message)
        .await?;
    Ok(HttpResponse::Ok().json(ChatResponse { reply }))
}

#[get("/api/sessions/{id}/transcript")]
pub async fn get_transcript(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let transcript = state.quiz_session_service.transcript(&id).await?;
    Ok(HttpResponse::Ok().json(render_transcript(&transcript)))
}

#[get("/api/sessions/{id}/answer-key")]
pub async fn get_answer_key(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let entries = state.quiz_session_service.answer_key(&id).await?;
    Ok(HttpResponse::Ok().json(AnswerKeyResponse { entries }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
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
}
