use actix_web::http::Method;
use actix_web::{error, middleware, web, HttpResponse};

use crate::web::handlers;
use crate::web::models::ErrorBody;

pub const ALLOWED_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
pub const ALLOWED_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

fn cors_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("Access-Control-Allow-Credentials", "true"))
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", ALLOWED_METHODS))
        .add(("Access-Control-Allow-Headers", ALLOWED_HEADERS))
}

// Any unreadable body is reported the same way as a missing message.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::info!("Rejected chat payload: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorBody::new(handlers::MESSAGE_REQUIRED));
        error::InternalError::from_response(err, response).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(cors_headers())
            .app_data(json_config())
            .service(
                web::resource("/chat")
                    .route(web::post().to(handlers::chat))
                    .route(web::method(Method::OPTIONS).to(handlers::preflight))
                    .default_service(web::to(handlers::method_not_allowed)),
            ),
    )
    .route("/health", web::get().to(handlers::health_check));
}
