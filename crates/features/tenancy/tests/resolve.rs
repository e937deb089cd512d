use pcx_domain::config::TenancyConfig;
use pcx_kernel::origin::StaticOrigin;
use pcx_tenancy::{Tenant, TenantResolver};
use proptest::prelude::*;

#[test]
fn admin_prefixed_hosts_resolve_to_admin() {
    let resolver = TenantResolver::default();
    for origin in [
        "admin.example.com",
        "ADMIN.example.com",
        "admin.example.com:5173",
        "https://admin.example.com",
        "https://admin.example.com/admin/analytics?tab=1",
    ] {
        assert_eq!(resolver.resolve(origin), Tenant::Admin, "{origin}");
    }
}

#[test]
fn other_hosts_resolve_to_public() {
    let resolver = TenantResolver::default();
    for origin in [
        "example.com",
        "www.example.com",
        "administration.example.com",
        "example.com/admin",
        "https://example.com:8443",
        "localhost:5173",
    ] {
        assert_eq!(resolver.resolve(origin), Tenant::Public, "{origin}");
    }
}

#[test]
fn garbage_resolves_to_public() {
    let resolver = TenantResolver::default();
    for origin in ["", " ", "::::", "http://", "%%%"] {
        assert_eq!(resolver.resolve(origin), Tenant::Public, "{origin:?}");
    }
}

#[test]
fn configured_prefix_is_honoured() {
    let config = TenancyConfig { admin_prefix: "ops.".to_owned(), origin: None };
    let resolver = TenantResolver::from_config(&config);
    assert_eq!(resolver.resolve("ops.example.com"), Tenant::Admin);
    assert_eq!(resolver.resolve("admin.example.com"), Tenant::Public);
}

#[test]
fn current_origin_is_read_through_the_accessor() {
    let resolver = TenantResolver::default();
    assert_eq!(resolver.resolve_current(&StaticOrigin::new("admin.example.com")), Tenant::Admin);
    assert_eq!(resolver.resolve_current(&StaticOrigin::new("example.com")), Tenant::Public);
}

proptest! {
    #[test]
    fn resolution_is_deterministic(origin in ".{0,64}") {
        let resolver = TenantResolver::default();
        let first = resolver.resolve(&origin);
        prop_assert_eq!(first, resolver.resolve(&origin));
        prop_assert_eq!(first, TenantResolver::default().resolve(&origin));
    }

    #[test]
    fn admin_prefix_decides_the_tenant(name in "[a-z][a-z0-9]{0,12}", tld in "[a-z]{2,6}") {
        let resolver = TenantResolver::default();
        let admin = format!("admin.{name}.{tld}");
        prop_assert_eq!(resolver.resolve(&admin), Tenant::Admin);
        prop_assert_eq!(resolver.resolve(&format!("https://{admin}/")), Tenant::Admin);

        let public = format!("{name}.{tld}");
        let expected = if public.starts_with("admin.") { Tenant::Admin } else { Tenant::Public };
        prop_assert_eq!(resolver.resolve(&public), expected);
    }
}
