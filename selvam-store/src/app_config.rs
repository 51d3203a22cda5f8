use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub smtp: SmtpConfig,
    pub quotation: QuotationConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Quotation data URLs are large; the default allows 10 MiB bodies.
    pub body_limit_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub recipient_email: String,
}

impl SmtpConfig {
    /// Both username and password set and non-empty.
    pub fn has_credentials(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.username) && set(&self.password)
    }

    /// Sender address: the SMTP account itself, or the recipient when none is configured.
    pub fn sender(&self) -> String {
        self.username
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| self.recipient_email.clone())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuotationConfig {
    /// Directory the PDFs are written to, created on first save.
    pub directory: String,
    /// URL prefix the site serves that directory under.
    pub public_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Business name in mail subjects and footers.
    pub name: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `SELVAM_SMTP__USERNAME=shop@gmail.com` sets `smtp.username`
            .add_source(
                config::Environment::with_prefix("SELVAM")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Built-in values only, no files or environment.
    pub fn from_defaults() -> Result<Self, config::ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.body_limit_bytes", 10 * 1024 * 1024)?
            .set_default("smtp.server", "smtp.gmail.com")?
            .set_default("smtp.port", 587)?
            .set_default("smtp.recipient_email", "info@shriselvamtiles.com")?
            .set_default("quotation.directory", "assets/Quotation")?
            .set_default("quotation.public_prefix", "/assets/Quotation")?
            .set_default("site.name", "Shri Selvam Tiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_defaults().unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.body_limit_bytes, 10 * 1024 * 1024);
        assert_eq!(config.smtp.server, "smtp.gmail.com");
        assert_eq!(config.smtp.port, 587);
        assert!(!config.smtp.has_credentials());
        assert_eq!(config.smtp.sender(), "info@shriselvamtiles.com");
        assert_eq!(config.quotation.public_prefix, "/assets/Quotation");
        assert_eq!(config.site.name, "Shri Selvam Tiles");
    }

    #[test]
    fn test_credentials_need_both_fields() {
        let mut smtp = Config::from_defaults().unwrap().smtp;
        smtp.username = Some("shop@gmail.com".to_string());
        assert!(!smtp.has_credentials());
        smtp.password = Some(" ".to_string());
        assert!(!smtp.has_credentials());
        smtp.password = Some("app-password".to_string());
        assert!(smtp.has_credentials());
        assert_eq!(smtp.sender(), "shop@gmail.com");
    }

    #[test]
    fn test_env_overrides_use_single_underscore_prefix() {
        env::set_var("SELVAM_SMTP__USERNAME", "shop@gmail.com");
        env::set_var("SELVAM_SMTP__PASSWORD", "app-password");
        env::set_var("SELVAM_SITE__NAME", "Selvam Granites");

        let loaded = Config::load();

        env::remove_var("SELVAM_SMTP__USERNAME");
        env::remove_var("SELVAM_SMTP__PASSWORD");
        env::remove_var("SELVAM_SITE__NAME");

        let config = loaded.unwrap();
        assert_eq!(config.smtp.username.as_deref(), Some("shop@gmail.com"));
        assert!(config.smtp.has_credentials());
        assert_eq!(config.site.name, "Selvam Granites");
        assert_eq!(config.smtp.port, 587);
    }
}
