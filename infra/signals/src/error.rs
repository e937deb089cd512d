use std::borrow::Cow;

/// Errors raised while registering or subscribing to signals.
#[pcx_derive::pcx_error]
pub enum SignalError {
    /// Nobody registered a publisher for the requested signal type.
    #[error("Signal not registered{}: {message}", format_context(.context))]
    NotRegistered { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A live publisher already owns the signal type.
    #[error("Signal already owned{}: {message}", format_context(.context))]
    AlreadyOwned { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The registry entry holds a different type than its key claims.
    /// Indicates a broken invariant inside the hub.
    #[error("Signal type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
