use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{BeanForm, ErrorResponse};
use crate::routes::recommend::AppState;
use crate::services::CatalogError;

/// Configure catalog management routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/beans", web::get().to(list_beans))
        .route("/beans", web::post().to(create_bean))
        .route("/beans/{id}", web::get().to(get_bean))
        .route("/beans/{id}", web::put().to(update_bean))
        .route("/beans/{id}", web::delete().to(delete_bean));
}

async fn list_beans(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.all())
}

async fn get_bean(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.get(id) {
        Ok(bean) => HttpResponse::Ok().json(bean),
        Err(CatalogError::NotFound(_)) => not_found(id),
    }
}

async fn create_bean(
    state: web::Data<AppState>,
    form: web::Json<BeanForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return validation_failed(errors);
    }

    let bean = state.catalog.create(form.into_inner());
    tracing::info!("Created bean {} ({})", bean.id, bean.name);
    HttpResponse::Created().json(bean)
}

async fn update_bean(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    form: web::Json<BeanForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return validation_failed(errors);
    }

    let id = path.into_inner();
    match state.catalog.update(id, form.into_inner()) {
        Ok(bean) => {
            tracing::info!("Updated bean {}", id);
            HttpResponse::Ok().json(bean)
        }
        Err(CatalogError::NotFound(_)) => not_found(id),
    }
}

async fn delete_bean(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.delete(id) {
        Ok(()) => {
            tracing::info!("Deleted bean {}", id);
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Err(CatalogError::NotFound(_)) => not_found(id),
    }
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed for bean form: {:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn not_found(id: u32) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Bean not found".to_string(),
        message: format!("No bean with id {}", id),
        status_code: 404,
    })
}
