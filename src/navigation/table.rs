use std::sync::Arc;

use tracing::{debug, warn};

use super::{HashLocation, LazyView, NavigationError};
use crate::{
    common::types::AnyError,
    media::ManifestSource,
    views::{HomeView, VideoView, View, ViewContext},
};

pub enum ViewBinding {
    Eager(Arc<dyn View>),
    Lazy(LazyView),
}

impl ViewBinding {
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    pub async fn view(&self, route: &str) -> Result<Arc<dyn View>, NavigationError> {
        match self {
            Self::Eager(view) => Ok(view.clone()),
            Self::Lazy(lazy) => lazy.load(route).await,
        }
    }
}

pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub binding: ViewBinding,
}

impl Route {
    /// Paths compare ignoring ASCII case.
    fn matches(&self, path: &str) -> bool {
        self.path.eq_ignore_ascii_case(path)
    }
}

/// A resolved navigation: the matched route, its loaded view and the
/// context to render it with.
pub struct Navigation {
    pub route: &'static str,
    pub view: Arc<dyn View>,
    pub context: ViewContext,
}

pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// `/` is the home page, built up front. `/videos` is built on first visit.
    pub fn default_routes(source: Arc<dyn ManifestSource>) -> Self {
        Self::new(vec![
            Route {
                path: "/",
                name: "home",
                binding: ViewBinding::Eager(Arc::new(HomeView)),
            },
            Route {
                path: "/videos",
                name: "videos",
                binding: ViewBinding::Lazy(LazyView::new(move || {
                    let source = source.clone();
                    async move {
                        let view: Arc<dyn View> = Arc::new(VideoView::new(source));
                        Ok::<_, AnyError>(view)
                    }
                })),
            },
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path = normalize(path);
        let route = self.routes.iter().find(|r| r.matches(path));
        if route.is_none() {
            warn!("No match found for location with path \"{}\"", path);
        }
        route
    }

    pub fn resolve_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub async fn navigate(&self, location: HashLocation) -> Result<Navigation, NavigationError> {
        let route = self
            .resolve(location.path())
            .ok_or_else(|| NavigationError::NoMatch {
                path: location.path().to_string(),
            })?;

        debug!("Navigating to `{}` ({})", route.name, location.path());
        let view = route.binding.view(route.name).await?;

        Ok(Navigation {
            route: route.name,
            view,
            context: ViewContext::new(location),
        })
    }
}

/// Drops the query and at most one trailing slash. `//` and `/videos//`
/// are left alone and match nothing.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() && !trimmed.ends_with('/') => trimmed,
        _ => path,
    }
}
