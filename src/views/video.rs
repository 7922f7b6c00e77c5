use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use super::{View, ViewContext};
use crate::{
    common::types::AnyResult,
    media::{ManifestSource, VideoFormat},
};

/// Query parameter carrying the format selector.
pub const FORMAT_PARAM: &str = "type";

/// Shows the manifest for the selected format. Falls back to mp4 when the
/// location carries no selector.
pub struct VideoView {
    source: Arc<dyn ManifestSource>,
}

impl VideoView {
    pub fn new(source: Arc<dyn ManifestSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl View for VideoView {
    fn name(&self) -> &'static str {
        "videos"
    }

    async fn render(&self, ctx: &ViewContext) -> AnyResult<Value> {
        let selector = ctx
            .param(FORMAT_PARAM)
            .unwrap_or(VideoFormat::Mp4.as_str());
        debug!("Rendering video view for `{}`", selector);

        let manifest = self.source.fetch_named(selector).await?;
        Ok(json!({
            "view": self.name(),
            "format": selector,
            "manifest": manifest,
        }))
    }
}
