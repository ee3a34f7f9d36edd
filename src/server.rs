use crate::app_state::{AppConfig, AppState};
use crate::classify::CONFIDENCE;
use crate::error::AnalyzeError;
use crate::io_struct::{AnalyzeReqInput, AnalyzeResponse, ErrorEnvelope};
use actix_web::{HttpRequest, HttpResponse, HttpServer, get, web};
use std::io::Write;

const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

#[get("/health")]
pub async fn health(_req: HttpRequest, _: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().body("Ok")
}

pub async fn analyze(
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AnalyzeError> {
    let input: AnalyzeReqInput = serde_json::from_slice(&body)
        .map_err(|e| AnalyzeError::InvalidBody(e.to_string()))?;

    let category = app_state.analyze_image(&input.image_base64).await?;
    log::info!("classified image as {}", category.as_str());

    Ok(HttpResponse::Ok()
        .insert_header(ALLOW_ORIGIN)
        .json(AnalyzeResponse {
            category,
            confidence: CONFIDENCE,
        }))
}

// CORS preflight; the body, if any, is ignored.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ALLOW_ORIGIN)
        .insert_header(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .insert_header(("Access-Control-Max-Age", "86400"))
        .finish()
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header(ALLOW_ORIGIN)
        .json(ErrorEnvelope::new("Method not allowed"))
}

pub fn analyze_resource() -> actix_web::Resource {
    web::resource("/analyze")
        .route(web::post().to(analyze))
        .route(web::method(actix_web::http::Method::OPTIONS).to(preflight))
        .route(web::route().to(method_not_allowed))
}

pub async fn startup(config: AppConfig, app_state: AppState) -> std::io::Result<()> {
    let app_state = web::Data::new(app_state);

    println!("Starting server at {}:{}", config.host, config.port);

    // default level is info
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .init();

    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(app_state.clone())
            .service(health)
            .service(analyze_resource())
    })
    .bind((config.host, config.port))?
    .run()
    .await?;

    std::io::Result::Ok(())
}
