use actix_web::{web, HttpResponse, Result};
use chrono::Utc;

use crate::models::HealthStatus;
use crate::services::StockService;

pub async fn health_check(service: web::Data<StockService>) -> Result<HttpResponse> {
    let response = HealthStatus {
        status: "ok".to_string(),
        cached_symbols: service.cache().len(),
        timestamp: Utc::now().to_rfc3339(),
    };
    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
