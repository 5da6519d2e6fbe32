//! Routed views rendered headless, one frame at a time

use std::sync::Arc;

use pretty_assertions::assert_eq;

use cinerate::egui_app::views::{self, RenderedPage};
use cinerate::egui_app::{AppState, ListFilter, Route};

use crate::common::{app_with_gateway, ScriptedGateway};

fn fresh_state() -> AppState {
    app_with_gateway(Arc::new(ScriptedGateway::accepting("unused"))).0
}

/// Run one frame of the shell and report the page it drew
fn render_frame(ctx: &egui::Context, state: &mut AppState) -> RenderedPage {
    let mut page = None;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        views::render_top_bar(ctx, state);
        page = Some(views::render_main_panel(ctx, state));
    });
    page.expect("main panel drew a page")
}

fn render_path(path: &str) -> RenderedPage {
    let ctx = egui::Context::default();
    let mut state = fresh_state();
    state.navigate(Route::parse(path));
    render_frame(&ctx, &mut state)
}

#[test]
fn test_unknown_film_id_renders_not_found() {
    assert_eq!(render_path("/films/99"), RenderedPage::FilmNotFound("99".to_string()));
}

#[test]
fn test_non_numeric_film_id_renders_not_found() {
    assert_eq!(render_path("/films/abc"), RenderedPage::FilmNotFound("abc".to_string()));
}

#[test]
fn test_unknown_path_renders_not_found() {
    assert_eq!(render_path("/nowhere"), RenderedPage::PageNotFound("/nowhere".to_string()));
}

#[test]
fn test_known_routes_render_their_page() {
    assert_eq!(render_path("/"), RenderedPage::Login);
    assert_eq!(render_path("/films"), RenderedPage::Films);
    assert_eq!(render_path("/films/1"), RenderedPage::FilmDetail(1));
    assert_eq!(render_path("/rated-films"), RenderedPage::AllFilms(ListFilter::Rated));
    assert_eq!(render_path("/unrated-films"), RenderedPage::AllFilms(ListFilter::Unrated));
}

#[test]
fn test_rendering_consumes_scroll_reset_once() {
    let ctx = egui::Context::default();
    let mut state = fresh_state();
    state.navigate(Route::Films);
    render_frame(&ctx, &mut state);

    state.navigate(Route::film(0));
    assert_eq!(render_frame(&ctx, &mut state), RenderedPage::FilmDetail(0));

    let transitions = state.navigator().transitions();
    assert!(!state.scroll_reset.should_reset(transitions));
    assert_eq!(render_frame(&ctx, &mut state), RenderedPage::FilmDetail(0));
}

#[test]
fn test_same_state_renders_same_page_across_frames() {
    let ctx = egui::Context::default();
    let mut state = fresh_state();
    state.navigate(Route::parse("/films/99"));

    for _ in 0..3 {
        assert_eq!(render_frame(&ctx, &mut state), RenderedPage::FilmNotFound("99".to_string()));
    }
    assert_eq!(state.current_route(), &Route::FilmDetail("99".to_string()));
}
