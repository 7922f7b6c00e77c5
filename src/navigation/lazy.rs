use std::{future::Future, sync::Arc};

use futures::{FutureExt, future::BoxFuture};
use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use super::NavigationError;
use crate::{common::types::AnyResult, views::View};

type ViewLoader = Box<dyn Fn() -> BoxFuture<'static, AnyResult<Arc<dyn View>>> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// A view that is only constructed the first time its route is visited.
///
/// Concurrent first visits share one load. A failed load leaves the cell
/// empty, so the next visit tries again.
pub struct LazyView {
    loader: ViewLoader,
    cell: OnceCell<Arc<dyn View>>,
    state: Mutex<LoadState>,
}

impl LazyView {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = AnyResult<Arc<dyn View>>> + Send + 'static,
    {
        Self {
            loader: Box::new(move || loader().boxed()),
            cell: OnceCell::new(),
            state: Mutex::new(LoadState::Idle),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state.lock().clone()
    }

    pub async fn load(&self, route: &str) -> Result<Arc<dyn View>, NavigationError> {
        let view = self
            .cell
            .get_or_try_init(|| async {
                self.set_state(LoadState::Loading);
                debug!("Loading view for route `{}`", route);

                match (self.loader)().await {
                    Ok(view) => {
                        self.set_state(LoadState::Ready);
                        Ok(view)
                    }
                    Err(e) => {
                        warn!("Loading view for route `{}` failed: {}", route, e);
                        self.set_state(LoadState::Failed(e.to_string()));
                        Err(NavigationError::ViewLoad {
                            route: route.to_string(),
                            reason: e.to_string(),
                        })
                    }
                }
            })
            .await?;

        Ok(view.clone())
    }

    fn set_state(&self, state: LoadState) {
        *self.state.lock() = state;
    }
}
