//! Enriched product records.

use serde::{Deserialize, Serialize};

use meli_client::types::{ItemDescription, Picture, ProductDetail};

/// A processed reference to one product image.
///
/// The host's remote-file utilities are out of scope here, so "importing"
/// an image means carrying its largest variation as metadata on the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub picture_id: Option<String>,
    pub url: String,
    pub max_size: Option<String>,
}

impl ImageRef {
    /// Build a reference from a picture, preferring the secure (largest)
    /// variation. Returns `None` when the picture carries no usable URL.
    pub fn from_picture(picture: &Picture) -> Option<Self> {
        let url = picture.secure_url.clone().or_else(|| picture.url.clone())?;
        Some(Self {
            picture_id: picture.id.clone(),
            url,
            max_size: picture.max_size.clone(),
        })
    }

    /// Process a picture list, dropping unusable entries and applying an
    /// optional per-product cap.
    pub fn from_pictures(pictures: &[Picture], cap: Option<usize>) -> Vec<Self> {
        let refs = pictures.iter().filter_map(Self::from_picture);
        match cap {
            Some(cap) => refs.take(cap).collect(),
            None => refs.collect(),
        }
    }
}

/// The flat record handed to node creation: the full catalog detail merged
/// with description text and processed image references.
///
/// `item_id` always carries the marketplace identifier. The host overwrites
/// the node's own `id`, so the marketplace id must live in a separate field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedProduct {
    pub item_id: String,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub currency_id: Option<String>,
    pub condition: Option<String>,
    pub permalink: Option<String>,
    pub sold_quantity: Option<u64>,
    pub available_quantity: Option<u64>,
    pub attributes: Vec<serde_json::Value>,
    pub item_description: Option<String>,
    pub item_images: Vec<ImageRef>,
    pub item_thumbnail: Option<ImageRef>,
}

impl EnrichedProduct {
    /// Reshape a detail record plus its description into the flat form.
    ///
    /// The thumbnail is always the first picture, uncapped. A missing
    /// description or an empty picture list is not an error.
    pub fn from_parts(
        detail: ProductDetail,
        description: Option<ItemDescription>,
        image_cap: Option<usize>,
    ) -> Self {
        let item_images = ImageRef::from_pictures(&detail.pictures, image_cap);
        let item_thumbnail = detail.pictures.first().and_then(ImageRef::from_picture);

        Self {
            item_id: detail.id,
            title: detail.title,
            price: detail.price,
            currency_id: detail.currency_id,
            condition: detail.condition,
            permalink: detail.permalink,
            sold_quantity: detail.sold_quantity,
            available_quantity: detail.available_quantity,
            attributes: detail.attributes,
            item_description: description.and_then(|d| d.plain_text),
            item_images,
            item_thumbnail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture(id: &str, secure: Option<&str>, plain: Option<&str>) -> Picture {
        Picture {
            id: Some(id.to_string()),
            url: plain.map(String::from),
            secure_url: secure.map(String::from),
            size: None,
            max_size: Some("1200x900".to_string()),
        }
    }

    fn detail_with_pictures(pictures: Vec<Picture>) -> ProductDetail {
        ProductDetail {
            id: "MLA123".to_string(),
            title: Some("Guitarra".to_string()),
            price: Some(1500.0),
            currency_id: Some("ARS".to_string()),
            condition: Some("new".to_string()),
            permalink: None,
            sold_quantity: Some(4),
            available_quantity: Some(1),
            date_created: None,
            last_updated: None,
            pictures,
            attributes: vec![],
        }
    }

    #[test]
    fn image_ref_prefers_secure_url() {
        let p = picture("p1", Some("https://img/p1"), Some("http://img/p1"));
        assert_eq!(ImageRef::from_picture(&p).unwrap().url, "https://img/p1");
    }

    #[test]
    fn image_ref_falls_back_to_plain_url() {
        let p = picture("p1", None, Some("http://img/p1"));
        assert_eq!(ImageRef::from_picture(&p).unwrap().url, "http://img/p1");
    }

    #[test]
    fn pictures_without_urls_are_dropped() {
        let pics = vec![picture("p1", None, None), picture("p2", Some("https://img/p2"), None)];
        let refs = ImageRef::from_pictures(&pics, None);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].picture_id.as_deref(), Some("p2"));
    }

    #[test]
    fn image_cap_is_applied() {
        let pics: Vec<Picture> = (0..5)
            .map(|i| picture(&format!("p{i}"), Some(&format!("https://img/p{i}")), None))
            .collect();
        assert_eq!(ImageRef::from_pictures(&pics, Some(3)).len(), 3);
        assert_eq!(ImageRef::from_pictures(&pics, None).len(), 5);
    }

    #[test]
    fn thumbnail_is_first_picture_even_when_capped() {
        let pics: Vec<Picture> = (0..5)
            .map(|i| picture(&format!("p{i}"), Some(&format!("https://img/p{i}")), None))
            .collect();
        let product = EnrichedProduct::from_parts(detail_with_pictures(pics), None, Some(3));
        assert_eq!(product.item_images.len(), 3);
        assert_eq!(
            product.item_thumbnail.unwrap().picture_id.as_deref(),
            Some("p0")
        );
    }

    #[test]
    fn item_id_carries_marketplace_identifier() {
        let product = EnrichedProduct::from_parts(
            detail_with_pictures(vec![]),
            Some(ItemDescription {
                plain_text: Some("Una guitarra".to_string()),
                text: None,
            }),
            None,
        );
        assert_eq!(product.item_id, "MLA123");
        assert_eq!(product.item_description.as_deref(), Some("Una guitarra"));
        assert!(product.item_thumbnail.is_none());
    }
}
