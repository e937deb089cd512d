use pcx_gating::GatingError;
use pcx_kernel::config::ConfigError;
use pcx_offers::OffersError;
use std::borrow::Cow;

/// Startup failures of the shell.
#[pcx_derive::pcx_error]
pub enum ShellError {
    #[error("Shell config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Shell gating error{}: {source}", format_context(.context))]
    Gating { source: GatingError, context: Option<Cow<'static, str>> },

    #[error("Shell offers error{}: {source}", format_context(.context))]
    Offers { source: OffersError, context: Option<Cow<'static, str>> },

    #[error("Invalid wallet configuration{}: {message}", format_context(.context))]
    Wallet { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal shell error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
