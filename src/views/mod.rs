pub mod home;
pub mod video;

use async_trait::async_trait;
use serde_json::Value;

use crate::{common::types::AnyResult, navigation::HashLocation};

pub use home::HomeView;
pub use video::VideoView;

/// A page-level view. Rendering produces the JSON view model for the page.
#[async_trait]
pub trait View: Send + Sync {
    fn name(&self) -> &'static str;

    async fn render(&self, ctx: &ViewContext) -> AnyResult<Value>;
}

/// What a view gets to see of the navigation that activated it.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub location: HashLocation,
}

impl ViewContext {
    pub fn new(location: HashLocation) -> Self {
        Self { location }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.location.param(key)
    }
}
