//! View-model endpoints for the public pages. Upstream failures degrade
//! to an inline error envelope so the page shell always renders.

use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Serialize)]
pub struct PageData {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageData {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn degraded(err: &AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.to_string()),
        }
    }
}

/// Render an upstream fetch as a page envelope, never as a failed page.
fn envelope(endpoint: &str, result: Result<Value, AppError>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(PageData::ok(data)),
        Err(err) => {
            warn!(endpoint = %endpoint, error = %err, message = "upstream fetch failed, rendering inline error");
            HttpResponse::Ok().json(PageData::degraded(&err))
        }
    }
}

async fn colleges(state: web::Data<AppState>) -> HttpResponse {
    envelope("/colleges", state.upstream.colleges().await)
}

async fn college_detail(state: web::Data<AppState>, slug: web::Path<String>) -> HttpResponse {
    envelope("/colleges/slug", state.upstream.college_by_slug(&slug).await)
}

async fn exams(state: web::Data<AppState>) -> HttpResponse {
    envelope("/exams", state.upstream.exams().await)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/colleges", web::get().to(colleges))
        .route("/colleges/{slug}", web::get().to(college_detail))
        .route("/exams", web::get().to(exams));
}
