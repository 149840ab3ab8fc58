use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_origin: String,
    /// Shared secret the external identity provider signs bearer tokens with.
    pub identity_secret: SecretString,
    pub openai_api_key: SecretString,
    pub openai_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "quizmaster-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            identity_secret: SecretString::from(
                env::var("IDENTITY_SECRET")
                    .unwrap_or_else(|_| "dev_secret_key_change_in_production".to_string()),
            ),
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| "openai_api_key".to_string()),
            ),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let identity_secret = self.identity_secret.expose_secret();

        if identity_secret == "dev_secret_key_change_in_production" {
            panic!(
                "FATAL: IDENTITY_SECRET is using default value! Set IDENTITY_SECRET environment variable to a secure random string."
            );
        }

        if identity_secret.len() < 32 {
            panic!(
                "FATAL: IDENTITY_SECRET is too short ({}). Must be at least 32 characters for security.",
                identity_secret.len()
            );
        }

        if self.openai_api_key.expose_secret() == "openai_api_key" {
            panic!(
                "FATAL: OPENAI_API_KEY is using default value! Set OPENAI_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "quizmaster-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_origin: "http://localhost:3000".to_string(),
            identity_secret: SecretString::from("test_identity_secret_key".to_string()),
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_model: "gpt-4o-mini".to_string(),
        }
    }
}
