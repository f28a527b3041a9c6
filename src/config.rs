use std::net::IpAddr;

pub const DEFAULT_FOOTER_TEXT: &str = "Submitted via KSRP Web Form";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    /// Sink address. Checked on every submission, never at startup.
    pub webhook_url: Option<String>,
    pub max_body_size: usize,
    pub footer_text: String,
    pub branding: Branding,
    pub log_level: String,
}

/// Header texts shown above the form.
#[derive(Debug, Clone)]
pub struct Branding {
    pub brand: String,
    pub tagline: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            brand: "GSRP".to_string(),
            tagline: "Georgia State Roleplay - Community Feedback".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("FEEDBACK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FEEDBACK_HOST: {e}"))?;

        let port: u16 = env_or("FEEDBACK_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FEEDBACK_PORT: {e}"))?;

        let base_url = env_or("FEEDBACK_BASE_URL", &format!("http://{host}:{port}"));

        let webhook_url = std::env::var("WEBHOOK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let max_body_size: usize = env_or("FEEDBACK_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid FEEDBACK_MAX_BODY_SIZE: {e}"))?;

        let footer_text = env_or("FEEDBACK_FOOTER_TEXT", DEFAULT_FOOTER_TEXT);

        let defaults = Branding::default();
        let branding = Branding {
            brand: env_or("FEEDBACK_BRAND", &defaults.brand),
            tagline: env_or("FEEDBACK_TAGLINE", &defaults.tagline),
        };

        let log_level = env_or("FEEDBACK_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            base_url,
            webhook_url,
            max_body_size,
            footer_text,
            branding,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
