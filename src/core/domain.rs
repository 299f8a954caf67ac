use serde::{Deserialize, Serialize};

// Identifiable defines common traits shared by objects kept on the shelf
pub trait Identifiable {
    fn id(&self) -> String;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl From<String> for LogFormat {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

// Configuration abstracts config options for the bookshelf
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub shelf_id: String,
    pub title_max_len: usize,
    pub author_max_len: usize,
    pub min_priority: u8,
    pub max_priority: u8,
    pub log_format: LogFormat,
}

pub const LOG_FORMAT_ENV: &str = "BOOKSHELF_LOG_FORMAT";

impl Configuration {
    pub fn new(shelf_id: &str) -> Self {
        Configuration {
            shelf_id: shelf_id.to_string(),
            title_max_len: 100,
            author_max_len: 100,
            min_priority: 1,
            max_priority: 10,
            log_format: LogFormat::Pretty,
        }
    }

    pub fn from_env(shelf_id: &str) -> Self {
        let mut config = Configuration::new(shelf_id);
        if let Ok(format) = std::env::var(LOG_FORMAT_ENV) {
            config.log_format = LogFormat::from(format);
        }
        config
    }
}
