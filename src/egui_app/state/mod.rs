use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

use tracing::Level;

use crate::egui_app::auth::{AuthGateway, AuthState, HttpAuthGateway};
use crate::egui_app::catalog_api::{CatalogSource, HttpCatalogSource};
use crate::egui_app::comments::CommentThreads;
use crate::egui_app::debug::DiagnosticsLog;
use crate::egui_app::login_form::{LoginForm, SubmitOutcome};
use crate::egui_app::rating::CardRatings;
use crate::egui_app::router::{Navigator, Route, ScrollReset};
use crate::egui_app::store::{CatalogAccess, CatalogStore};
use crate::egui_app::Config;
use crate::shared::{ClientError, CommentError, FilmId};

pub type LogoutResult = Result<(), ClientError>;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub auth_state: AuthState,
    pub login_form: LoginForm,
    pub card_ratings: CardRatings,
    pub comments: CommentThreads,
    pub comment_draft: String,
    pub comment_error: Option<String>,
    pub diagnostics: DiagnosticsLog,
    pub show_diagnostics: bool,
    pub diagnostics_level: Level,
    pub scroll_reset: ScrollReset,
    navigator: Navigator,
    catalog: CatalogStore,
    auth_gateway: Arc<dyn AuthGateway>,
    pending_logout: Option<Receiver<LogoutResult>>,
}

impl AppState {
    /// State wired to the HTTP API described by the loaded configuration
    pub fn new(diagnostics: DiagnosticsLog) -> Self {
        let config = Config::new();
        let auth: Arc<dyn AuthGateway> = Arc::new(HttpAuthGateway::new(config.clone()));
        let source: Arc<dyn CatalogSource> = Arc::new(HttpCatalogSource::new(config.clone()));
        Self::with_services(config, auth, source, diagnostics)
    }

    /// State with explicit collaborators
    pub fn with_services(
        config: Config,
        auth_gateway: Arc<dyn AuthGateway>,
        catalog_source: Arc<dyn CatalogSource>,
        diagnostics: DiagnosticsLog,
    ) -> Self {
        let mut catalog = CatalogStore::seeded(catalog_source);
        if config.refresh_on_start() {
            catalog.refresh();
        }
        tracing::info!("AppState initialized against {}", config.server_url());

        Self {
            login_form: LoginForm::new(config.identifier_kind()),
            config,
            auth_state: AuthState::new(),
            card_ratings: CardRatings::default(),
            comments: CommentThreads::new(),
            comment_draft: String::new(),
            comment_error: None,
            diagnostics,
            show_diagnostics: false,
            diagnostics_level: Level::INFO,
            scroll_reset: ScrollReset::default(),
            navigator: Navigator::default(),
            catalog,
            auth_gateway,
            pending_logout: None,
        }
    }

    /// The session's catalog; always the same instance
    pub fn use_catalog(&mut self) -> &mut impl CatalogAccess {
        &mut self.catalog
    }

    pub fn catalog(&self) -> &impl CatalogAccess {
        &self.catalog
    }

    pub fn is_refreshing_catalog(&self) -> bool {
        self.catalog.is_refreshing()
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigate(&mut self, route: Route) {
        let leaving_login = self.current_route() == &Route::Login;
        if self.navigator.navigate(route) {
            self.remount(leaving_login);
        }
    }

    pub fn back(&mut self) {
        let leaving_login = self.current_route() == &Route::Login;
        if self.navigator.back() {
            self.remount(leaving_login);
        }
    }

    /// Views are rebuilt on every route transition: card ratings and drafts go
    fn remount(&mut self, leaving_login: bool) {
        self.card_ratings.clear();
        self.comment_draft.clear();
        self.comment_error = None;
        if leaving_login {
            self.login_form.reset();
        }
    }

    /// Per-frame work: collect finished background calls
    pub fn update(&mut self) {
        self.catalog.poll();
        self.check_auth_result();
        self.check_logout_result();
    }

    pub fn submit_login(&mut self) -> SubmitOutcome {
        self.login_form.submit(Arc::clone(&self.auth_gateway))
    }

    pub fn check_auth_result(&mut self) {
        if let Some(response) = self.login_form.poll() {
            self.config.set_token(Some(response.access_token));
            self.auth_state.sign_in(response.user);
            tracing::info!("Signed in as {}", self.auth_state.display_name());
            self.navigate(Route::Films);
        }
    }

    /// Drop the local session and tell the server, without waiting for it
    pub fn logout(&mut self) {
        let token = self.config.get_token();
        self.config.clear_token();
        self.auth_state.sign_out();

        let leaving_login = self.current_route() == &Route::Login;
        self.navigator.reset(Route::Login);
        self.remount(leaving_login);

        let Some(token) = token else {
            return;
        };
        let gateway = Arc::clone(&self.auth_gateway);
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(gateway.logout(&token));
        });
        self.pending_logout = Some(rx);
    }

    fn check_logout_result(&mut self) {
        let result = match self.pending_logout {
            Some(ref rx) => match rx.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => Err(ClientError::runtime("logout worker exited without a result")),
            },
            None => return,
        };
        self.pending_logout = None;
        match result {
            Ok(()) => tracing::info!("Server session closed"),
            Err(e) => tracing::warn!("Logout call failed, local session already cleared: {}", e),
        }
    }

    pub fn is_logging_out(&self) -> bool {
        self.pending_logout.is_some()
    }

    /// Post the current draft on `film_id`
    pub fn post_comment(&mut self, film_id: FilmId) -> Result<(), CommentError> {
        let author = self.auth_state.display_name().to_string();
        match self.comments.post(film_id, &author, &self.comment_draft) {
            Ok(_) => {
                self.comment_draft.clear();
                self.comment_error = None;
                Ok(())
            }
            Err(e) => {
                self.comment_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn toggle_diagnostics(&mut self) {
        self.show_diagnostics = !self.show_diagnostics;
    }
}
