//! Remote product catalog client.
//!
//! # Responsibility
//! - Fetch the public catalog listing with a single unauthenticated GET.
//! - Provide the case-insensitive title search used by the products view.
//!
//! # Invariants
//! - Exactly one request per call: no retry, no pagination.
//! - Fetch failures are surfaced to the caller; the catalog is consumed
//!   read-only and never cached or persisted.

use log::{info, warn};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Public catalog endpoint queried when the binding does not override it.
pub const DEFAULT_PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog fetch error, split by which stage of the request failed.
#[derive(Debug)]
pub enum CatalogError {
    /// The request never produced a usable response.
    Transport(reqwest::Error),
    /// The endpoint answered with a non-success status.
    Status(u16),
    /// The response body was not the expected product array.
    Decode(reqwest::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "catalog request failed: {err}"),
            Self::Status(code) => write!(f, "catalog endpoint returned HTTP {code}"),
            Self::Decode(err) => write!(f, "catalog payload could not be decoded: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) | Self::Decode(err) => Some(err),
            Self::Status(_) => None,
        }
    }
}

/// One catalog entry. Unknown upstream fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub price: f64,
}

/// Fetches the full product listing from `url`.
///
/// # Errors
/// - [`CatalogError::Transport`] when the endpoint is unreachable.
/// - [`CatalogError::Status`] for non-success HTTP answers.
/// - [`CatalogError::Decode`] when the body is not a product array.
pub fn fetch_products(url: &str) -> CatalogResult<Vec<Product>> {
    info!("event=products_fetch module=catalog status=start url={url}");

    let response = reqwest::blocking::get(url).map_err(|err| {
        warn!("event=products_fetch module=catalog status=error error_code=transport error={err}");
        CatalogError::Transport(err)
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(
            "event=products_fetch module=catalog status=error error_code=http_status status_code={}",
            status.as_u16()
        );
        return Err(CatalogError::Status(status.as_u16()));
    }

    let products = response.json::<Vec<Product>>().map_err(|err| {
        warn!("event=products_fetch module=catalog status=error error_code=decode error={err}");
        CatalogError::Decode(err)
    })?;

    info!(
        "event=products_fetch module=catalog status=ok count={}",
        products.len()
    );
    Ok(products)
}

/// Filters `products` by case-insensitive substring match on the title.
///
/// A blank query matches everything; catalog order is preserved.
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{search_products, Product};

    fn sample_products() -> Vec<Product> {
        serde_json::from_str(SAMPLE_LISTING).expect("sample listing should decode")
    }

    // Trimmed fakestore-shaped payload: extra fields must not break decode.
    const SAMPLE_LISTING: &str = r#"[
        {
            "id": 1,
            "title": "Claw Hammer",
            "price": 109.95,
            "description": "16oz fiberglass handle",
            "category": "tools",
            "image": "https://example.com/hammer.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Nail Set",
            "price": 22.3,
            "description": "assorted sizes",
            "category": "fasteners",
            "image": "https://example.com/nails.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        },
        {
            "id": 3,
            "title": "Sledge hammer",
            "price": 55.99,
            "description": "8lb",
            "category": "tools",
            "image": "https://example.com/sledge.jpg",
            "rating": { "rate": 4.7, "count": 500 }
        }
    ]"#;

    #[test]
    fn decode_keeps_the_consumed_fields_and_ignores_the_rest() {
        let products = sample_products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].title, "Claw Hammer");
        assert_eq!(products[0].image, "https://example.com/hammer.jpg");
        assert!((products[0].price - 109.95).abs() < f64::EPSILON);
    }

    #[test]
    fn search_is_case_insensitive_and_preserves_order() {
        let products = sample_products();
        let hits = search_products(&products, "HAMMER");
        let titles: Vec<_> = hits.iter().map(|product| product.title.as_str()).collect();
        assert_eq!(titles, ["Claw Hammer", "Sledge hammer"]);
    }

    #[test]
    fn blank_query_matches_everything() {
        let products = sample_products();
        assert_eq!(search_products(&products, "").len(), 3);
        assert_eq!(search_products(&products, "   ").len(), 3);
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let products = sample_products();
        assert!(search_products(&products, "wrench").is_empty());
    }
}
