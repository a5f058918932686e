//! Image references and URL derivation for the store's image CDN.
//!
//! Images are stored as references to an asset document whose ID encodes the
//! asset hash, original dimensions, and file extension, e.g.
//! `image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg`. Resolving a reference into a
//! URL is a pure string transformation and never touches the network.

use serde::{Deserialize, Serialize};

/// Host serving every image asset.
pub static IMAGE_CDN_HOST: &str = "cdn.sanity.io";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ImageRef {
    pub asset: AssetRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<ImageCrop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<ImageHotspot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            asset: AssetRef {
                reference: reference.into(),
            },
            crop: None,
            hotspot: None,
            alt: None,
            caption: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// Fractions of the original image trimmed from each edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ImageCrop {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ImageHotspot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Components of an image asset ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAsset<'a> {
    pub hash: &'a str,
    pub width: u32,
    pub height: u32,
    pub extension: &'a str,
}

impl<'a> ImageAsset<'a> {
    /// Parses `image-<hash>-<width>x<height>-<ext>`.
    ///
    /// Returns `None` for anything that is not a well-formed image asset ID.
    pub fn parse(reference: &'a str) -> Option<Self> {
        let rest = reference.strip_prefix("image-")?;
        let (rest, extension) = rest.rsplit_once('-')?;
        let (hash, dimensions) = rest.rsplit_once('-')?;
        let (width, height) = dimensions.split_once('x')?;

        if hash.is_empty() || extension.is_empty() {
            return None;
        }

        Some(Self {
            hash,
            width: width.parse().ok()?,
            height: height.parse().ok()?,
            extension,
        })
    }
}

/// Builds CDN URLs for image references of a single project and dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// Resolve an image into a CDN URL, optionally resized.
    ///
    /// A crop on the image is applied as a `rect` parameter in source pixels.
    /// Output is deterministic: the same image and sizes always produce the
    /// same URL.
    ///
    /// # Returns
    /// - `Some(String)` - URL pointing at the image CDN
    /// - `None` - The asset reference is not a well-formed image asset ID
    pub fn url(&self, image: &ImageRef, width: Option<u32>, height: Option<u32>) -> Option<String> {
        let mut url = self.asset_url(&image.asset.reference, width, height)?;

        if let (Some(crop), Some(asset)) = (image.crop, ImageAsset::parse(&image.asset.reference)) {
            if let Some(rect) = crop_rect(&crop, &asset) {
                url.push(if url.contains('?') { '&' } else { '?' });
                url.push_str(&rect);
            }
        }

        Some(url)
    }

    /// Resolve a bare asset reference into a CDN URL.
    pub fn asset_url(&self, reference: &str, width: Option<u32>, height: Option<u32>) -> Option<String> {
        let asset = ImageAsset::parse(reference)?;

        let mut url = format!(
            "https://{}/images/{}/{}/{}-{}x{}.{}",
            IMAGE_CDN_HOST,
            self.project_id,
            self.dataset,
            asset.hash,
            asset.width,
            asset.height,
            asset.extension
        );

        let params: Vec<String> = [("w", width), ("h", height)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
            .collect();

        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }

        Some(url)
    }
}

fn crop_rect(crop: &ImageCrop, asset: &ImageAsset<'_>) -> Option<String> {
    if crop.top == 0.0 && crop.bottom == 0.0 && crop.left == 0.0 && crop.right == 0.0 {
        return None;
    }

    let width = f64::from(asset.width);
    let height = f64::from(asset.height);

    let left = (crop.left * width).round() as u32;
    let top = (crop.top * height).round() as u32;
    let rect_width = ((1.0 - crop.left - crop.right) * width).round() as u32;
    let rect_height = ((1.0 - crop.top - crop.bottom) * height).round() as u32;

    Some(format!("rect={},{},{},{}", left, top, rect_width, rect_height))
}
