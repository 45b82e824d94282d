mod settings;

pub use settings::{
    AudioSettings, LoggingSettings, ServerSettings, Settings, StorageSettings,
    TranscriptionProviderSetting, TranscriptionSettings,
};
