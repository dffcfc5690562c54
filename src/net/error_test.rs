use super::*;

#[test]
fn graphql_error_displays_server_message_verbatim() {
    assert_eq!(ApiError::Graphql("user not found".to_owned()).to_string(), "user not found");
}

#[test]
fn status_and_missing_field_messages() {
    assert_eq!(ApiError::Status(502).to_string(), "request failed with status 502");
    assert_eq!(ApiError::MissingField("loginUser").to_string(), "response missing `loginUser`");
}
