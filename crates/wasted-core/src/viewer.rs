use std::path::Path;

use tracing::info;
use url::Url;

use crate::assets::{is_data_url, load_image};
use crate::consts::DEFAULT_SHIRT_TEXTURE;
use crate::error::Result;
use crate::share::{shirt_param, viewer_link};
use crate::texture::{split_shirt_texture, ShirtTextures};

/// State of the shirt viewer page: which texture is on the shirt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShirtViewer {
    texture_ref: String,
}

impl Default for ShirtViewer {
    fn default() -> Self {
        Self {
            texture_ref: DEFAULT_SHIRT_TEXTURE.to_string(),
        }
    }
}

impl ShirtViewer {
    pub fn with_texture(texture_ref: impl Into<String>) -> Self {
        Self {
            texture_ref: texture_ref.into(),
        }
    }

    /// Viewer for a route URL, falling back to the default texture when the
    /// `shirt` parameter is missing or empty.
    pub fn from_route(url: &Url) -> Self {
        shirt_param(url).map(Self::with_texture).unwrap_or_default()
    }

    pub fn texture_ref(&self) -> &str {
        &self.texture_ref
    }

    /// True when the texture came from an upload rather than the catalog.
    pub fn is_uploaded(&self) -> bool {
        is_data_url(&self.texture_ref)
    }

    /// Replace the texture with an uploaded `data:` reference.
    pub fn apply_upload(&mut self, data_url: String) {
        info!(bytes = data_url.len(), "Shirt texture replaced by upload");
        self.texture_ref = data_url;
    }

    pub fn share_link(&self, site: &Url) -> Result<Url> {
        viewer_link(site, &self.texture_ref)
    }

    /// Load the current texture and cut it into front/back panels.
    pub fn load_panels(&self, asset_root: &Path) -> Result<ShirtTextures> {
        let texture = load_image(asset_root, &self.texture_ref)?;
        split_shirt_texture(&texture)
    }
}
