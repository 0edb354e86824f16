use serde::{Deserialize, Serialize};

/// Description shown when a product row carries no usable body text.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// Single feature entry used when a product row carries no tags.
pub const FEATURES_PLACEHOLDER: &str = "Premium quality";

/// Category assigned when the type cell is blank and no keyword matches.
pub const UNCATEGORIZED: &str = "UNCATEGORIZED";

/// Fixed specification block attached to every imported product. The export
/// format carries no spec columns, so these defaults are not CSV-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    pub material: String,
    pub size: String,
    pub noise: String,
    pub battery: String,
}

impl Default for Specs {
    fn default() -> Self {
        Self {
            material: "Body-safe silicone".to_string(),
            size: "One size".to_string(),
            noise: "< 50 dB".to_string(),
            battery: "USB rechargeable".to_string(),
        }
    }
}

/// A purchasable sub-configuration of a product, keyed by a composite id
/// derived from the handle and up to three option values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Composite identifier: handle plus option values, lower-cased with
    /// whitespace runs collapsed to hyphens.
    pub id: String,
    pub sku: String,
    pub option1: Option<String>,
    pub option2: Option<String>,
    pub option3: Option<String>,
    /// Row price, falling back to the parent product price when the cell
    /// does not parse.
    pub price: f64,
    pub image: Option<String>,
    pub in_stock: bool,
}

/// A normalized product record aggregated from one or more export rows
/// sharing the same handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable per-product slug key that groups export rows together.
    pub id: String,
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    /// Unique image URLs in first-seen order.
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub specs: Specs,
    pub in_stock: bool,
    pub option1_name: Option<String>,
    pub option2_name: Option<String>,
    pub option3_name: Option<String>,
    pub variants: Vec<Variant>,
}
