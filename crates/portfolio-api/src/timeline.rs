use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::debug;

use portfolio_types::api::{RawTimelinePost, TimelinePostList};

use crate::error::ApiError;
use crate::guestbook::DeleteOutcome;
use crate::state::AppState;

/// Timeline post fields read from a urlencoded or multipart form body.
///
/// A repeated field keeps its first value. A body with any other content
/// type counts as one with every field missing, so it fails validation like
/// any other incomplete post. A form body that cannot be decoded is rejected
/// with the decoder's own 4xx response.
pub struct PostForm(pub RawTimelinePost);

impl<S> FromRequest<S> for PostForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;

            let mut fields = Vec::new();
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(IntoResponse::into_response)?
            {
                let Some(name) = field.name().map(str::to_string) else {
                    continue;
                };
                let value = field.text().await.map_err(IntoResponse::into_response)?;
                fields.push((name, value));
            }
            return Ok(Self(RawTimelinePost::from_fields(fields)));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(RawTimelinePost::from_fields(fields)));
        }

        debug!("Timeline post without a form body (content type {:?})", content_type);
        Ok(Self(RawTimelinePost::default()))
    }
}

/// POST /api/timeline_post: form fields `name`, `email`, `content`.
pub async fn create_post(
    State(state): State<AppState>,
    PostForm(raw): PostForm,
) -> Result<impl IntoResponse, ApiError> {
    let post = state.with_guestbook(move |gb| gb.create(raw)).await?;
    Ok(Json(post))
}

/// GET /api/timeline_post: every post, newest first.
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let timeline_posts = state.with_guestbook(|gb| gb.list()).await?;
    Ok(Json(TimelinePostList { timeline_posts }))
}

/// DELETE /api/timeline_post: drops the oldest post.
pub async fn delete_post(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let outcome = state.with_guestbook(|gb| gb.delete_oldest()).await?;

    Ok(match outcome {
        DeleteOutcome::Deleted(post) => format!("deleted post made by {}\n", post.name),
        DeleteOutcome::Empty => "There are none to be deleted\n".to_string(),
    })
}
