pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub(super) fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}
