use crate::classify::{Category, classify};
use crate::error::AnalyzeError;
use crate::io_struct::{ChatCompletionRequest, ChatCompletionResponse};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const MAX_TOKENS: u32 = 10;
const TEMPERATURE: f64 = 0.1;

// The model is instructed (in Russian) to answer with exactly one of the
// four category tokens and nothing else.
const PROMPT: &str = "Проанализируй это изображение и определи его категорию:

1. \"portrait\" - если на фото изображено лицо человека (портрет)
2. \"car\" - если на фото изображена машина (автомобиль, любой транспорт)
3. \"apartment\" - если на фото изображена квартира, дом, интерьер жилья
4. \"unknown\" - если ни одна из категорий не подходит

Ответь ТОЛЬКО одним словом из списка выше: portrait, car, apartment или unknown.
Никаких дополнительных объяснений.";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub model: String,
    pub api_base: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// One outbound chat-completion call, no retries. The client timeout is
    /// the only bound on the request.
    pub async fn analyze_image(&self, image_base64: &str) -> Result<Category, AnalyzeError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AnalyzeError::MissingApiKey)?;

        let request = ChatCompletionRequest::single_image_turn(
            &self.config.model,
            PROMPT,
            image_base64,
            MAX_TOKENS,
            TEMPERATURE,
        );

        let url = format!("{}/v1/chat/completions", self.config.api_base);
        let resp = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AnalyzeError::Upstream(body));
        }

        let completion: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| AnalyzeError::MalformedReply(format!("unexpected upstream body: {}", e)))?;
        let reply = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| {
                AnalyzeError::MalformedReply("upstream reply carried no choices".to_string())
            })?;

        log::debug!("upstream reply: {:?}", reply);
        Ok(classify(reply))
    }
}
