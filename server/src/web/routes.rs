// server/src/web/routes.rs

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::product_handlers;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Bodies that do not fit the request schema are answered with a 400 envelope.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(err.to_string()).into()
}

/// Mounts the catalog API under `/api`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::resource("/products")
          .route(web::get().to(product_handlers::list_products_handler))
          .route(web::post().to(product_handlers::create_product_handler)),
      )
      .service(
        web::resource("/product/{id}")
          .route(web::put().to(product_handlers::update_product_handler))
          .route(web::delete().to(product_handlers::delete_product_handler)),
      ),
  );
}
