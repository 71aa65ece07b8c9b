mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuthSettings, DatabaseSettings, GroqSettings, ServerSettings, Settings, SettingsError,
};
