use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use photo_classifier_rs::app_state::{AppConfig, AppState};
use serde_json::json;

/// Chat-completions envelope whose first choice carries `content`.
pub fn completion_body(content: &str) -> String {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
    .to_string()
}

/// Stand-in for the OpenAI endpoint: answers every POST to
/// /v1/chat/completions with a fixed status and body. Returns the base URL.
pub async fn start_mock_upstream(status: StatusCode, body: String) -> String {
    let server = HttpServer::new(move || {
        let body = body.clone();
        App::new().route(
            "/v1/chat/completions",
            web::post().to(move || {
                let body = body.clone();
                async move {
                    HttpResponse::build(status)
                        .content_type("application/json")
                        .body(body)
                }
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind mock upstream");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

pub fn test_state(api_base: &str, api_key: Option<&str>) -> AppState {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        model: "gpt-4o-mini".to_string(),
        api_base: api_base.to_string(),
        api_key: api_key.map(|k| k.to_string()),
        timeout_secs: 5,
    };
    AppState::new(config).expect("build app state")
}
