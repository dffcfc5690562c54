use super::*;

#[test]
fn normalize_token_trims_whitespace() {
    assert_eq!(normalize_token("  eyJ.abc \n"), Some("eyJ.abc".to_owned()));
}

#[test]
fn normalize_token_rejects_blank() {
    assert_eq!(normalize_token(""), None);
    assert_eq!(normalize_token("   "), None);
}

#[cfg(not(feature = "browser"))]
#[test]
fn storage_is_inert_outside_the_browser() {
    store_token("jwt", "eyJ.abc");
    assert_eq!(load_token("jwt"), None);
    delete_token("jwt");
}
