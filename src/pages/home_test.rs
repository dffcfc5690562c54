use super::*;

#[test]
fn greeting_names_the_user() {
    let user = User { id: "1".to_owned(), email: "alice@example.com".to_owned(), name: "Alice".to_owned() };
    assert_eq!(greeting(Some(&user)), "Signed in as Alice (alice@example.com)");
}

#[test]
fn greeting_without_user_is_generic() {
    assert_eq!(greeting(None), "Welcome");
}
