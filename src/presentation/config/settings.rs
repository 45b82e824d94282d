use std::str::FromStr;

use serde::Deserialize;

const DEFAULT_ALLOWED_MIME_TYPES: &str =
    "audio/mp3,audio/mpeg,audio/wav,audio/webm,audio/ogg,video/mp4";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub audio: AudioSettings,
    pub transcription: TranscriptionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub audio_dir: String,
    pub transcript_cache_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub max_upload_size_mb: usize,
    pub allowed_mime_types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub mock_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    Mock,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Builds settings from environment variables, falling back to local
    /// development defaults.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 3000),
            },
            storage: StorageSettings {
                audio_dir: env_or("AUDIO_STORAGE_DIR", "storage"),
                transcript_cache_capacity: env_parse("TRANSCRIPT_CACHE_CAPACITY", 1024),
            },
            audio: AudioSettings {
                max_upload_size_mb: env_parse("MAX_UPLOAD_SIZE_MB", 50),
                allowed_mime_types: std::env::var("ALLOWED_FILE_TYPES")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_MIME_TYPES.to_string())
                    .split(',')
                    .map(|mime| mime.trim().to_string())
                    .filter(|mime| !mime.is_empty())
                    .collect(),
            },
            transcription: TranscriptionSettings {
                provider: match std::env::var("TRANSCRIPTION_PROVIDER").as_deref() {
                    Ok("openai") => TranscriptionProviderSetting::OpenAi,
                    _ => TranscriptionProviderSetting::Mock,
                },
                model: env_or("WHISPER_MODEL", "whisper-1"),
                api_key: std::env::var("OPENAI_API_KEY").ok(),
                base_url: std::env::var("OPENAI_BASE_URL").ok(),
                mock_delay_ms: env_parse("MOCK_RESPONSE_DELAY", 0),
            },
            logging: LoggingSettings {
                level: env_or("LOG_LEVEL", "info"),
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
