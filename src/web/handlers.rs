use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, info};
use uuid::Uuid;

use crate::model::shaper;
use crate::model::GatewayError;
use crate::state::AppState;
use crate::web::models::{ChatRequest, ChatResponse, ErrorBody, HealthResponse};

pub const MESSAGE_REQUIRED: &str = "Message is required";

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        message: "Chat proxy server is running".to_string(),
    })
}

// CORS preflight; headers come from the scope middleware
pub async fn preflight() -> impl Responder {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(ErrorBody::new("Method not allowed"))
}

// Chat API endpoint
pub async fn chat(data: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    let request_id = Uuid::new_v4();

    let message = match req.message() {
        Some(message) => message,
        None => {
            info!("[{}] Rejected chat request without a message", request_id);
            return HttpResponse::BadRequest().json(ErrorBody::new(MESSAGE_REQUIRED));
        }
    };

    info!("[{}] Chat request ({} characters)", request_id, message.chars().count());
    debug!("[{}] Message: {}", request_id, message);

    match data.gateway.complete(&data.system_prompt, message).await {
        Ok(raw) => {
            let response = shaper::shape(&raw);
            info!("[{}] Replying with {} characters", request_id, response.chars().count());
            HttpResponse::Ok().json(ChatResponse { response })
        }
        Err(GatewayError::MissingApiKey) => {
            error!("[{}] GROQ_API_KEY is not set", request_id);
            HttpResponse::InternalServerError().json(ErrorBody::with_message(
                "Server configuration error",
                "API key not configured. Please contact the site owner.",
            ))
        }
        Err(e) => {
            error!("[{}] Upstream error: {}", request_id, e);
            HttpResponse::InternalServerError()
                .json(ErrorBody::with_message("Failed to get response", e.to_string()))
        }
    }
}
