pub struct DefaultsConfig {
    pub precision: u32,
    pub model: String,
    pub endpoint: String,
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}
