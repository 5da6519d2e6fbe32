//! Login form submission and logout, end to end through `AppState`

use std::sync::Arc;

use pretty_assertions::assert_eq;

use cinerate::egui_app::login_form::{Field, PASSWORD_MESSAGE, USERNAME_MESSAGE};
use cinerate::egui_app::{LoginStage, Route, SubmitOutcome, TokenStore};
use cinerate::shared::error::NETWORK_FALLBACK_MESSAGE;
use cinerate::shared::ClientError;

use crate::common::{app_with_gateway, pump_until, ScriptedGateway};

fn fill(state: &mut cinerate::egui_app::AppState, identifier: &str, password: &str) {
    state.login_form.values.identifier = identifier.to_string();
    state.login_form.values.password = password.to_string();
}

#[test]
fn test_successful_login_stores_token_and_opens_catalog() {
    let gateway = Arc::new(ScriptedGateway::accepting("token-123"));
    let (mut state, tokens) = app_with_gateway(gateway.clone());

    fill(&mut state, "MovieFan42", "secret1");
    assert_eq!(state.submit_login(), SubmitOutcome::Submitted);
    assert!(state.login_form.is_submitting());

    assert!(pump_until(&mut state, |s| s.current_route() == &Route::Films));

    assert_eq!(tokens.load().unwrap(), Some("token-123".to_string()));
    assert_eq!(state.config.get_token().as_deref(), Some("token-123"));
    assert!(state.auth_state.authenticated);
    assert_eq!(state.auth_state.display_name(), "MovieFan42");

    let logins = gateway.logins();
    assert_eq!(logins.len(), 1);
    assert_eq!(logins[0].identifier, "MovieFan42");
    assert_eq!(logins[0].password, "secret1");
}

#[test]
fn test_rejected_login_shows_server_reason() {
    let gateway = Arc::new(ScriptedGateway::rejecting(401, Some("Invalid credentials")));
    let (mut state, tokens) = app_with_gateway(gateway);

    fill(&mut state, "MovieFan42", "wrongpass");
    state.submit_login();
    assert!(pump_until(&mut state, |s| !s.login_form.is_submitting()));

    assert_eq!(state.current_route(), &Route::Login);
    assert_eq!(state.login_form.form_error(), Some("Invalid credentials"));
    assert_eq!(tokens.load().unwrap(), None);
    assert!(!state.auth_state.authenticated);
}

#[test]
fn test_unreachable_server_shows_network_message() {
    let gateway = Arc::new(ScriptedGateway::new(Err(ClientError::network("connection refused"))));
    let (mut state, _tokens) = app_with_gateway(gateway);

    fill(&mut state, "MovieFan42", "secret1");
    state.submit_login();
    assert!(pump_until(&mut state, |s| !s.login_form.is_submitting()));

    assert_eq!(state.login_form.form_error(), Some(NETWORK_FALLBACK_MESSAGE));
    assert_eq!(state.current_route(), &Route::Login);
}

#[test]
fn test_invalid_fields_never_reach_the_server() {
    let gateway = Arc::new(ScriptedGateway::accepting("unused"));
    let (mut state, _tokens) = app_with_gateway(gateway.clone());

    fill(&mut state, "bob", "12345");
    assert_eq!(state.submit_login(), SubmitOutcome::Invalid);

    assert_eq!(state.login_form.field_error(Field::Identifier), Some(USERNAME_MESSAGE));
    assert_eq!(state.login_form.field_error(Field::Password), Some(PASSWORD_MESSAGE));
    assert_eq!(state.login_form.stage(), &LoginStage::Editing { error: None });
    assert!(gateway.logins().is_empty());
}

#[test]
fn test_second_submit_while_pending_is_ignored() {
    let gateway = Arc::new(ScriptedGateway::accepting("token-123"));
    let (mut state, _tokens) = app_with_gateway(gateway.clone());

    fill(&mut state, "MovieFan42", "secret1");
    assert_eq!(state.submit_login(), SubmitOutcome::Submitted);
    assert_eq!(state.submit_login(), SubmitOutcome::Busy);

    assert!(pump_until(&mut state, |s| s.current_route() == &Route::Films));
    assert_eq!(gateway.logins().len(), 1);
}

#[test]
fn test_failed_login_can_be_retried() {
    let gateway = Arc::new(ScriptedGateway::rejecting(500, None));
    let (mut state, _tokens) = app_with_gateway(gateway.clone());

    fill(&mut state, "MovieFan42", "secret1");
    state.submit_login();
    assert!(pump_until(&mut state, |s| !s.login_form.is_submitting()));
    assert_eq!(state.login_form.form_error(), Some("Login failed. Please try again."));

    assert_eq!(state.submit_login(), SubmitOutcome::Submitted);
    assert!(pump_until(&mut state, |s| !s.login_form.is_submitting()));
    assert_eq!(gateway.logins().len(), 2);
}

#[test]
fn test_logout_clears_session_and_calls_server() {
    let gateway = Arc::new(ScriptedGateway::accepting("token-123"));
    let (mut state, tokens) = app_with_gateway(gateway.clone());

    fill(&mut state, "MovieFan42", "secret1");
    state.submit_login();
    assert!(pump_until(&mut state, |s| s.current_route() == &Route::Films));

    state.logout();
    assert_eq!(state.current_route(), &Route::Login);
    assert!(!state.auth_state.authenticated);
    assert_eq!(tokens.load().unwrap(), None);
    assert!(!state.navigator().can_go_back());

    assert!(pump_until(&mut state, |s| !s.is_logging_out()));
    assert_eq!(gateway.logouts(), vec!["token-123".to_string()]);
}

#[test]
fn test_logout_succeeds_locally_when_server_fails() {
    let gateway = Arc::new(
        ScriptedGateway::accepting("token-123").with_logout_result(Err(ClientError::network("down"))),
    );
    let (mut state, tokens) = app_with_gateway(gateway);

    fill(&mut state, "MovieFan42", "secret1");
    state.submit_login();
    assert!(pump_until(&mut state, |s| s.current_route() == &Route::Films));

    state.logout();
    assert!(pump_until(&mut state, |s| !s.is_logging_out()));
    assert_eq!(state.current_route(), &Route::Login);
    assert_eq!(tokens.load().unwrap(), None);
}

#[test]
fn test_logout_without_token_skips_server() {
    let gateway = Arc::new(ScriptedGateway::accepting("unused"));
    let (mut state, _tokens) = app_with_gateway(gateway.clone());

    state.navigate(Route::Films);
    state.logout();

    assert!(!state.is_logging_out());
    assert!(gateway.logouts().is_empty());
    assert_eq!(state.current_route(), &Route::Login);
}
