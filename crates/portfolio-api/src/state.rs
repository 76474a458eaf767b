use std::sync::Arc;

use tracing::error;

use portfolio_types::TimelineError;

use crate::error::ApiError;
use crate::guestbook::Guestbook;
use crate::pages::content::Profile;
use crate::pages::render::PageRenderer;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub guestbook: Guestbook,
    pub profile: Profile,
    pub renderer: Box<dyn PageRenderer>,
}

impl AppStateInner {
    /// Run a guestbook operation off the async runtime.
    pub async fn with_guestbook<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Guestbook) -> Result<T, TimelineError> + Send + 'static,
        T: Send + 'static,
    {
        let guestbook = self.guestbook.clone();
        tokio::task::spawn_blocking(move || f(&guestbook))
            .await
            .map_err(|e| {
                error!("spawn_blocking join error: {}", e);
                ApiError(TimelineError::Storage(e.into()))
            })?
            .map_err(ApiError)
    }
}
