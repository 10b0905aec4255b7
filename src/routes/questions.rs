use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, QuestionForm};
use crate::routes::recommend::AppState;
use crate::services::SurveyError;

/// Configure survey question management routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/questions", web::get().to(list_questions))
        .route("/questions", web::post().to(create_question))
        .route("/questions/active", web::get().to(active_questions))
        .route("/questions/{id}", web::get().to(get_question))
        .route("/questions/{id}", web::put().to(update_question))
        .route("/questions/{id}", web::delete().to(delete_question));
}

async fn list_questions(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.questions.all())
}

/// Active questions in display order, as the survey page renders them
async fn active_questions(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.questions.active())
}

async fn get_question(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    match state.questions.get(id) {
        Ok(question) => HttpResponse::Ok().json(question),
        Err(SurveyError::NotFound(_)) => not_found(id),
    }
}

async fn create_question(
    state: web::Data<AppState>,
    form: web::Json<QuestionForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return validation_failed(errors);
    }

    let question = state.questions.create(form.into_inner());
    tracing::info!(
        "Created question {} for {:?}",
        question.id,
        question.dimension
    );
    HttpResponse::Created().json(question)
}

async fn update_question(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    form: web::Json<QuestionForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return validation_failed(errors);
    }

    let id = path.into_inner();
    match state.questions.update(id, form.into_inner()) {
        Ok(question) => {
            tracing::info!("Updated question {}", id);
            HttpResponse::Ok().json(question)
        }
        Err(SurveyError::NotFound(_)) => not_found(id),
    }
}

async fn delete_question(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    match state.questions.delete(id) {
        Ok(()) => {
            tracing::info!("Deleted question {}", id);
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Err(SurveyError::NotFound(_)) => not_found(id),
    }
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed for question form: {:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn not_found(id: u32) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Question not found".to_string(),
        message: format!("No question with id {}", id),
        status_code: 404,
    })
}
