pub mod app_config;
pub mod quotation_repo;
pub mod mailer;

pub use quotation_repo::FsQuotationRepository;
pub use mailer::{build_mailer, LogMailer, SmtpMailer};
