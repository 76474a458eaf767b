pub mod content;
pub mod render;

use axum::{extract::State, response::Html};

use crate::error::ApiError;
use crate::state::{AppState, AppStateInner};
use content::{Page, PageBody, PageId};

fn render(state: &AppStateInner, id: PageId, body: PageBody) -> Html<String> {
    let page = Page::new(id, &state.profile, body);
    Html(state.renderer.render(&page))
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    render(&state, PageId::Index, content::home())
}

pub async fn about(State(state): State<AppState>) -> Html<String> {
    render(&state, PageId::About, content::about())
}

pub async fn work(State(state): State<AppState>) -> Html<String> {
    render(&state, PageId::Work, content::work())
}

pub async fn education(State(state): State<AppState>) -> Html<String> {
    render(&state, PageId::Education, content::education())
}

pub async fn hobbies(State(state): State<AppState>) -> Html<String> {
    render(&state, PageId::Hobbies, content::hobbies())
}

pub async fn where_am_i(State(state): State<AppState>) -> Html<String> {
    render(&state, PageId::WhereAmI, content::places())
}

/// GET /timeline: the guestbook rendered newest first.
pub async fn timeline(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let timeline_posts = state.with_guestbook(|gb| gb.list()).await?;
    Ok(render(&state, PageId::Timeline, PageBody::Timeline { timeline_posts }))
}
