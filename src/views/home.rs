use async_trait::async_trait;
use serde_json::{Value, json};

use super::{View, ViewContext};
use crate::{common::types::AnyResult, media::VideoFormat};

pub struct HomeView;

#[async_trait]
impl View for HomeView {
    fn name(&self) -> &'static str {
        "home"
    }

    async fn render(&self, _ctx: &ViewContext) -> AnyResult<Value> {
        let formats: Vec<_> = VideoFormat::ALL.iter().map(VideoFormat::as_str).collect();
        Ok(json!({
            "view": self.name(),
            "formats": formats,
        }))
    }
}
