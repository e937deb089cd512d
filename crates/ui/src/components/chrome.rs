use crate::context::WalletContext;
use dioxus::prelude::*;

/// Consent overlay. Dismissal only lasts for the session.
#[component]
pub fn CookieBanner() -> Element {
    let mut visible = use_signal(|| true);

    rsx! {
        if visible() {
            aside { class: "pcx-cookie-banner", role: "dialog",
                p { "We use cookies to keep you signed in and to improve our service." }
                button { class: "pcx-button", onclick: move |_| visible.set(false), "Accept" }
            }
        }
    }
}

/// Floating chat launcher.
#[component]
pub fn ChatWidget() -> Element {
    let mut open = use_signal(|| false);
    let label = if open() { "Close chat" } else { "Open chat" };

    rsx! {
        div { class: "pcx-chat-widget",
            if open() {
                section { class: "pcx-chat-widget__panel",
                    h2 { "Charter concierge" }
                    p { "Ask about availability, empty legs or pricing." }
                }
            }
            button {
                class: "pcx-chat-widget__toggle",
                aria_label: label,
                onclick: move |_| open.toggle(),
                if open() { "×" } else { "Chat" }
            }
        }
    }
}

/// Entry point of the wallet modal, opened by the chain adapter on the
/// configured default network.
#[component]
pub fn WalletButton() -> Element {
    let WalletContext(wallet) = use_context::<WalletContext>();
    let chain_id = wallet.default_network.chain_id();
    let app = wallet.metadata.name;

    rsx! {
        button { class: "pcx-button pcx-wallet", "data-chain-id": "{chain_id}", title: "{app}", "Connect wallet" }
    }
}
