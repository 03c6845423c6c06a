use log::warn;

const PLACEHOLDER_JWT_SECRET: &str = "your-secret-key-change-in-production";
const PLACEHOLDER_WEBHOOK_SECRET: &str = "change-this-secret";
const PLACEHOLDER_PRODUCT_ID: &str = "PRODUCT_ID";

/// Runtime configuration, built once in `main` and carried in `AppState`.
/// Handlers never read the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub webhook_secret: String,
    pub checkout_product_id: String,
    pub admin_emails: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let config = Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| PLACEHOLDER_JWT_SECRET.to_string()),
            webhook_secret: std::env::var("CAKTO_WEBHOOK_SECRET")
                .unwrap_or_else(|_| PLACEHOLDER_WEBHOOK_SECRET.to_string()),
            checkout_product_id: std::env::var("CAKTO_PRODUCT_ID")
                .unwrap_or_else(|_| PLACEHOLDER_PRODUCT_ID.to_string()),
            admin_emails: std::env::var("ADMIN_EMAILS")
                .unwrap_or_else(|_| "admin@r4academy.com".to_string())
                .split(',')
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        };
        config.warn_on_placeholders();
        config
    }

    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.to_lowercase();
        self.admin_emails.iter().any(|e| *e == email)
    }

    /// Placeholder secrets keep local development working but must never go
    /// unnoticed in a real deployment.
    fn warn_on_placeholders(&self) {
        for (name, value, placeholder) in [
            ("JWT_SECRET", &self.jwt_secret, PLACEHOLDER_JWT_SECRET),
            (
                "CAKTO_WEBHOOK_SECRET",
                &self.webhook_secret,
                PLACEHOLDER_WEBHOOK_SECRET,
            ),
            (
                "CAKTO_PRODUCT_ID",
                &self.checkout_product_id,
                PLACEHOLDER_PRODUCT_ID,
            ),
        ] {
            if value == placeholder {
                warn!("[Config] {name} is unset, falling back to an insecure placeholder");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            database_url: "postgres://localhost/academy".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            jwt_secret: "test-secret".to_string(),
            webhook_secret: "test-webhook-secret".to_string(),
            checkout_product_id: "prod_123".to_string(),
            admin_emails: vec!["admin@r4academy.com".to_string()],
        }
    }

    #[test]
    fn admin_email_match_is_case_insensitive() {
        let config = test_config();
        assert!(config.is_admin_email("admin@r4academy.com"));
        assert!(config.is_admin_email("Admin@R4Academy.com"));
        assert!(!config.is_admin_email("someone@else.com"));
    }
}
