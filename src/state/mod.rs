//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by concern (`route`, `status`, `articles`) so each piece
//! can be tested on its own. `ClientState` bundles them into the snapshot
//! that `App` publishes to observers.

pub mod articles;
pub mod route;
pub mod status;

use articles::ArticleCache;
use route::Route;
use status::UiStatus;

/// Everything a presentational layer needs to render one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientState {
    pub route: Route,
    pub status: UiStatus,
    pub articles: ArticleCache,
}
