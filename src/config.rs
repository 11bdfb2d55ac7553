const DEFAULT_PORT: &str = "8080";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct Config {
    pub bind_addr: String,
    pub gemini: GeminiConfig,
}

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    ///
    /// Fails when `API_KEY` is missing; the server must not start without it.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("API_KEY environment variable is not set."))?;

        let temperature = match lookup("TRANSLATOR_TEMPERATURE") {
            Some(raw) => raw.trim().parse::<f32>().map_err(|_| {
                anyhow::anyhow!("TRANSLATOR_TEMPERATURE must be a number, got '{}'", raw)
            })?,
            None => DEFAULT_TEMPERATURE,
        };
        if !(0.0..=2.0).contains(&temperature) {
            return Err(anyhow::anyhow!(
                "TRANSLATOR_TEMPERATURE must be between 0.0 and 2.0, got {}",
                temperature
            ));
        }

        Ok(Config {
            bind_addr: {
                let port = lookup("TRANSLATOR_PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
                lookup("TRANSLATOR_BIND_ADDR").unwrap_or_else(|| format!("0.0.0.0:{}", port))
            },
            gemini: GeminiConfig {
                api_key,
                model: lookup("TRANSLATOR_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                temperature,
                base_url: lookup("TRANSLATOR_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            },
        })
    }
}
