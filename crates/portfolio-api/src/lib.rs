pub mod error;
pub mod guestbook;
pub mod pages;
pub mod routes;
pub mod state;
pub mod timeline;

pub use guestbook::{DeleteOutcome, Guestbook};
pub use routes::router;
pub use state::{AppState, AppStateInner};
