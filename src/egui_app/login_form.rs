//! Login form
//!
//! Holds the two field values, checks them against fixed patterns and drives
//! the single submission:
//!
//! ```text
//! Editing -> Validating -> ValidationFailed -> Editing
//!                       -> Submitting -> Success -> Navigated
//!                                     -> Failure -> Editing (with error)
//! ```
//!
//! `Validating` happens synchronously inside `submit`; `Submitting` lasts until
//! the background call's result is picked up by `poll`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::egui_app::auth::AuthGateway;
use crate::egui_app::types::{AuthResponse, LoginRequest};
use crate::shared::{ClientError, IdentifierKind};

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,20}$").expect("username pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PASSWORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.{6,20}$").expect("password pattern compiles"));

pub const USERNAME_MESSAGE: &str = "Username must contain 6-20 characters (uppercase, lowercase or numbers)";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str = "Password must contain 6-20 characters";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Identifier,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Identifier, Field::Password];

    pub fn label(self, kind: IdentifierKind) -> &'static str {
        match (self, kind) {
            (Field::Identifier, IdentifierKind::Username) => "Login",
            (Field::Identifier, IdentifierKind::Email) => "Email",
            (Field::Password, _) => "Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Identifier => write!(f, "identifier"),
            Field::Password => write!(f, "password"),
        }
    }
}

/// Per-field error messages; empty means the form may be submitted
pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormValues {
    pub identifier: String,
    pub password: String,
}

impl LoginFormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Identifier => &self.identifier,
            Field::Password => &self.password,
        }
    }
}

fn rule(field: Field, kind: IdentifierKind) -> (&'static Regex, &'static str) {
    match (field, kind) {
        (Field::Identifier, IdentifierKind::Username) => (&*USERNAME_PATTERN, USERNAME_MESSAGE),
        (Field::Identifier, IdentifierKind::Email) => (&*EMAIL_PATTERN, EMAIL_MESSAGE),
        (Field::Password, _) => (&*PASSWORD_PATTERN, PASSWORD_MESSAGE),
    }
}

/// Check every field, collecting one message per failing field
pub fn validate(values: &LoginFormValues, kind: IdentifierKind) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        let value = values.get(field);
        let (pattern, message) = rule(field, kind);
        if value.is_empty() {
            errors.insert(field, format!("{} is required", field.label(kind)));
        } else if !pattern.is_match(value) {
            errors.insert(field, message.to_string());
        }
    }
    errors
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStage {
    /// Accepting input; `error` is the last submission failure, if any
    Editing { error: Option<String> },
    Submitting,
    /// Logged in; the owner moves on to the catalog
    Navigated,
}

/// What `submit` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the field errors are set
    Invalid,
    /// The request is in flight
    Submitted,
    /// A request was already in flight; nothing happened
    Busy,
}

pub type LoginResult = Result<AuthResponse, ClientError>;

pub struct LoginForm {
    pub values: LoginFormValues,
    kind: IdentifierKind,
    field_errors: FieldErrors,
    stage: LoginStage,
    pending: Option<Receiver<LoginResult>>,
}

impl LoginForm {
    pub fn new(kind: IdentifierKind) -> Self {
        Self {
            values: LoginFormValues::default(),
            kind,
            field_errors: FieldErrors::new(),
            stage: LoginStage::Editing { error: None },
            pending: None,
        }
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn stage(&self) -> &LoginStage {
        &self.stage
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    /// Submission failure shown above the button
    pub fn form_error(&self) -> Option<&str> {
        match self.stage {
            LoginStage::Editing { error: Some(ref error) } => Some(error),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.stage == LoginStage::Submitting
    }

    /// Validate and, if clean, send the login request on a background thread
    pub fn submit(&mut self, gateway: Arc<dyn AuthGateway>) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }

        self.field_errors = validate(&self.values, self.kind);
        if !self.field_errors.is_empty() {
            tracing::debug!("Login blocked by {} field error(s)", self.field_errors.len());
            self.stage = LoginStage::Editing { error: None };
            return SubmitOutcome::Invalid;
        }

        let request = LoginRequest {
            identifier: self.values.identifier.clone(),
            password: self.values.password.clone(),
        };
        tracing::info!("Submitting login for {}", request.identifier);

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(gateway.login(&request));
        });

        self.pending = Some(rx);
        self.stage = LoginStage::Submitting;
        SubmitOutcome::Submitted
    }

    /// Pick up the submission result, if it has arrived
    ///
    /// Returns the auth response on success; the stage is then `Navigated`.
    /// On failure the stage returns to `Editing` with a message.
    pub fn poll(&mut self) -> Option<AuthResponse> {
        let result = match self.pending {
            Some(ref rx) => match rx.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    Err(ClientError::runtime("login worker exited without a result"))
                }
            },
            None => return None,
        };
        self.pending = None;
        self.finish(result)
    }

    /// Apply a submission result directly
    pub fn finish(&mut self, result: LoginResult) -> Option<AuthResponse> {
        match result {
            Ok(response) => {
                tracing::info!("Login succeeded");
                self.stage = LoginStage::Navigated;
                self.values.password.clear();
                Some(response)
            }
            Err(e) => {
                tracing::error!("Login failed: {}", e);
                self.stage = LoginStage::Editing {
                    error: Some(e.user_message()),
                };
                None
            }
        }
    }

    /// Drop values and errors, e.g. when leaving the login route
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }
}
