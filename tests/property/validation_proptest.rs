//! Property-based tests for login field validation

use proptest::prelude::*;

use cinerate::egui_app::login_form::{validate, Field, LoginFormValues, PASSWORD_MESSAGE, USERNAME_MESSAGE};
use cinerate::shared::IdentifierKind;

fn values(identifier: &str, password: &str) -> LoginFormValues {
    LoginFormValues {
        identifier: identifier.to_string(),
        password: password.to_string(),
    }
}

proptest! {
    #[test]
    fn test_alphanumeric_usernames_accepted(
        username in "[A-Za-z0-9]{6,20}",
        password in "[a-z0-9!#]{6,20}",
    ) {
        let errors = validate(&values(&username, &password), IdentifierKind::Username);
        prop_assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_short_usernames_rejected(username in "[A-Za-z0-9]{1,5}") {
        let errors = validate(&values(&username, "secret1"), IdentifierKind::Username);
        prop_assert_eq!(errors.get(&Field::Identifier).map(String::as_str), Some(USERNAME_MESSAGE));
        prop_assert!(!errors.contains_key(&Field::Password));
    }

    #[test]
    fn test_long_usernames_rejected(username in "[A-Za-z0-9]{21,40}") {
        let errors = validate(&values(&username, "secret1"), IdentifierKind::Username);
        prop_assert!(errors.contains_key(&Field::Identifier));
    }

    #[test]
    fn test_usernames_with_symbols_rejected(
        head in "[A-Za-z0-9]{3,8}",
        symbol in "[ _.@-]",
        tail in "[A-Za-z0-9]{3,8}",
    ) {
        let username = format!("{}{}{}", head, symbol, tail);
        let errors = validate(&values(&username, "secret1"), IdentifierKind::Username);
        prop_assert!(errors.contains_key(&Field::Identifier));
    }

    #[test]
    fn test_password_length_bounds(len in 1usize..40) {
        let password = "p".repeat(len);
        let errors = validate(&values("MovieFan42", &password), IdentifierKind::Username);
        if (6..=20).contains(&len) {
            prop_assert!(errors.is_empty());
        } else {
            prop_assert_eq!(errors.get(&Field::Password).map(String::as_str), Some(PASSWORD_MESSAGE));
        }
    }

    #[test]
    fn test_email_shape(local in "[a-z0-9.]{1,10}", domain in "[a-z0-9]{1,10}", tld in "[a-z]{2,4}") {
        let email = format!("{}@{}.{}", local, domain, tld);
        let errors = validate(&values(&email, "secret1"), IdentifierKind::Email);
        prop_assert!(errors.is_empty(), "{} rejected: {:?}", email, errors);
    }

    #[test]
    fn test_email_without_at_rejected(text in "[a-z0-9.]{3,20}") {
        let errors = validate(&values(&text, "secret1"), IdentifierKind::Email);
        prop_assert!(errors.contains_key(&Field::Identifier));
    }
}
