//! Image-asset resolution for collection records.
//!
//! DESIGN
//! ======
//! Collection JSON references images by their source-tree path
//! (`/src/assets/...`), while the host serves them from `/assets/...`.
//! Resolution rewrites the prefix and vouches only for the image formats the
//! site ships; anything else is `None` and callers render a placeholder.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

const SOURCE_PREFIX: &str = "/src/assets/";
const SERVED_PREFIX: &str = "/assets/";
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "svg"];

/// A resolved, servable asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRef {
    /// URL the asset is served from.
    pub src: String,
}

/// Resolve a collection source path to a servable asset.
#[must_use]
pub fn resolve(path: Option<&str>) -> Option<AssetRef> {
    let path = path?;
    let relative = path.strip_prefix(SOURCE_PREFIX)?;
    let extension = relative.rsplit_once('.').map(|(_, ext)| ext)?;
    if !IMAGE_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()) {
        return None;
    }
    Some(AssetRef {
        src: format!("{SERVED_PREFIX}{relative}"),
    })
}
