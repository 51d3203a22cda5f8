use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use selvam_api::{app, AppState};
use selvam_core::enquiry::EnquiryService;
use selvam_core::quotation::QuotationService;
use selvam_shared::mask_email;
use selvam_store::{app_config::Config, build_mailer, FsQuotationRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "selvam_api=debug,selvam_core=info,selvam_store=info,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;

    let mailer = build_mailer(&config.smtp).context("Failed to build mailer")?;
    let enquiries = EnquiryService::new(mailer, config.smtp.sender(), config.smtp.recipient_email.clone())
        .with_site_name(config.site.name.clone());

    let repo = FsQuotationRepository::new(&config.quotation.directory, &config.quotation.public_prefix);
    let quotations = QuotationService::new(Arc::new(repo));

    let app_state = AppState {
        enquiries: Arc::new(enquiries),
        quotations: Arc::new(quotations),
        body_limit_bytes: config.server.body_limit_bytes,
    };

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    tracing::info!("Shri Selvam Tiles & Granites - Backend Server");
    tracing::info!("Server running on: http://{}", addr);
    tracing::info!("SMTP Server: {}", config.smtp.server);
    tracing::info!(
        "SMTP Username: {}",
        config
            .smtp
            .username
            .as_deref()
            .filter(|_| config.smtp.has_credentials())
            .map(mask_email)
            .unwrap_or_else(|| "Not configured".to_string())
    );
    tracing::info!("Quotations stored in {}", config.quotation.directory);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
