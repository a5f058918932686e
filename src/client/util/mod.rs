pub mod api;

use crate::model::image::{ImageAsset, ImageRef};

/// Path of the server route redirecting to the image CDN, `None` for malformed references.
pub fn image_src(image: &ImageRef, width: u32) -> Option<String> {
    ImageAsset::parse(&image.asset.reference)?;

    Some(format!(
        "/api/images/{}?w={}",
        image.asset.reference, width
    ))
}
