use pcx_signals::SignalError;
use std::borrow::Cow;

/// Failures while wiring the gate to its signals.
#[pcx_derive::pcx_error]
pub enum GatingError {
    #[error("Gating signal error{}: {source}", format_context(.context))]
    Signal { source: SignalError, context: Option<Cow<'static, str>> },

    #[error("Internal gating error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
