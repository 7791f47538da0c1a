use std::{collections::HashMap, fs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:5000".into(),
        }
    }
}

/// Optional `server.toml` in the working directory, then env overrides.
/// Missing or malformed sources fall back to defaults; the server has no
/// required configuration.
pub fn load_settings() -> Settings {
    let raw = fs::read_to_string("server.toml").unwrap_or_default();
    let mut settings = settings_from_toml(&raw);

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    settings
}

fn settings_from_toml(raw: &str) -> Settings {
    let mut settings = Settings::default();
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.server_bind = v.clone();
        }
    }
    settings
}
