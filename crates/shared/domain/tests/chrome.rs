use pcx_domain::{ChromeSet, Tenant};

#[test]
fn public_tenant_mounts_every_overlay() {
    let chrome = ChromeSet::for_tenant(Tenant::Public);
    assert!(chrome.contains(ChromeSet::COOKIE_BANNER));
    assert!(chrome.contains(ChromeSet::CHAT_WIDGET));
}

#[test]
fn admin_tenant_mounts_no_overlay() {
    assert!(ChromeSet::for_tenant(Tenant::Admin).is_empty());
}

#[test]
fn tenant_names_match_serialized_form() {
    for tenant in Tenant::ALL {
        let encoded = serde_json::to_value(tenant).expect("serialize tenant");
        assert_eq!(encoded, serde_json::Value::String(tenant.to_string()));
    }
}
