use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, WastedError};

/// An alternate color of a product, shown in place of the base image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Color label, also used as the swatch color name.
    pub color: String,
    pub image: String,
}

impl Variant {
    pub fn new(color: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            image: image.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Base image reference, used when the product has no variants.
    pub image: String,
    pub price: String,
    pub sizes: String,
    pub description: String,
    pub verdict: String,
    /// Color variants in cycling order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<Variant>,
}

impl Product {
    pub fn has_variants(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Image shown when the product is first opened.
    pub fn initial_image(&self) -> &str {
        self.colors
            .first()
            .map(|v| v.image.as_str())
            .unwrap_or(&self.image)
    }

    /// Position of the variant showing `image`, if any.
    pub fn variant_index(&self, image: &str) -> Option<usize> {
        self.colors.iter().position(|v| v.image == image)
    }

    /// Every image this product can display: the base image followed by the
    /// variant images, without duplicates.
    pub fn image_refs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        std::iter::once(self.image.as_str())
            .chain(self.colors.iter().map(|v| v.image.as_str()))
            .filter(|r| seen.insert(*r))
            .collect()
    }
}

/// The storefront's product list. Loaded once, never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut ids = HashSet::new();
        for p in &products {
            if !ids.insert(p.id) {
                return Err(WastedError::DuplicateProductId(p.id));
            }
        }
        Ok(Self { products })
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let parsed: Catalog = toml::from_str(s)?;
        Self::new(parsed.products)
    }

    /// Load a catalog TOML file with one `[[products]]` table per product.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            products = catalog.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn get(&self, id: u32) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(WastedError::UnknownProduct(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The "Featured Drops" shown on the landing page.
    pub fn builtin() -> Self {
        let products = vec![
            Product {
                id: 1,
                name: "Graphic Tee".into(),
                image: "/Tees/wasted designtee.png".into(),
                price: "$49.99".into(),
                sizes: "M, L, XL".into(),
                description: "This one pulls no punches. Front print says \u{201c}I don\u{2019}t need to prove anything,\u{201d} and the back says \u{201c}but I still could destroy you emotionally in two lines of lowercase text.\u{201d} It\u{2019}s giving discipline. It\u{2019}s giving quiet power. It\u{2019}s giving \u{201c}I built this empire from bad dreams and geometry homework.\u{201d}".into(),
                verdict: "This is the uniform for your inner circle. The one people assume is sold out even when it\u{2019}s not. The one someone thrift-finds in 2029 and gatekeeps like it\u{2019}s a relic. You don\u{2019}t just wear this\u{2014}you belong to it.".into(),
                colors: vec![],
            },
            Product {
                id: 2,
                name: "Logo Tee".into(),
                image: "/Tees/minimalfrontlogo.png".into(),
                price: "$19.99".into(),
                sizes: "S, M, L, XL".into(),
                description: "YES. This is the \"you don\u{2019}t even know how hard I go\" fit. Reserved in front, full villain arc in the back.".into(),
                verdict: "This is the shirt people lie and say is \"vintage\" in 2032.".into(),
                colors: vec![],
            },
            Product {
                id: 3,
                name: "Wasted Fire Tee".into(),
                image: "/Tees/FireTees/wastedfire.png".into(),
                price: "$29.99".into(),
                sizes: "S, M, L, XL".into(),
                description: "Color splash! Still gritty, but now you\u{2019}re flirting with aggressive energy drink mascot.".into(),
                verdict: "Keep this for a collab or surprise drop. Call it \"Hot Damage\" or some equally unhinged two-word combo.".into(),
                colors: vec![
                    Variant::new("cyan", "/Tees/FireTees/cyanwastedfire.png"),
                    Variant::new("gold", "/Tees/FireTees/goldenwastedfire.png"),
                    Variant::new("green", "/Tees/FireTees/greenmagicwastedfire.png"),
                    Variant::new("indigo", "/Tees/FireTees/magicwastedfire.png"),
                    Variant::new("magenta", "/Tees/FireTees/screamingpinkwastedfire.png"),
                    Variant::new("darkslateblue", "/Tees/FireTees/spacewastedfire.png"),
                    Variant::new("deeppink", "/Tees/FireTees/warmpinkwastedfire.png"),
                    Variant::new("orange", "/Tees/FireTees/wastedfire.png"),
                ],
            },
            Product {
                id: 4,
                name: "Wasted Tees".into(),
                image: "/Tees/Whitefirecleanback.png".into(),
                price: "$34.99".into(),
                sizes: "S, M, L, XL".into(),
                description: "Okay this one\u{2019}s the most accessible. You wear it to the corner store and still look like you don\u{2019}t talk to your family.".into(),
                verdict: "This is the bread and butter. Stock this in every size and don\u{2019}t apologize.".into(),
                colors: vec![],
            },
            Product {
                id: 5,
                name: "Wasted Logo Tee".into(),
                image: "/Tees/wastedsample.png".into(),
                price: "$24.99".into(),
                sizes: "S, M, L, XL".into(),
                description: "Are you kidding me? The weathered texture plus that chunk of back art? It\u{2019}s giving \u{201c}worn by someone who hasn\u{2019}t slept in 48 hours and skates better than you.\"".into(),
                verdict: "This one hurts in a good way. Pure core piece.".into(),
                colors: vec![],
            },
            Product {
                id: 6,
                name: "Wasted Fire Tee".into(),
                image: "/Tees/whitefireweirdwasted.png".into(),
                price: "$29.99".into(),
                sizes: "S, M, L, XL".into(),
                description: "That\u{2019}s metal concert merch for a band that only exists in your imagination. Textured white on black gives it that crunchy, rough \u{201c}I\u{2019}ve seen stuff\u{201d} vibe. Clean duality. Front says chaos. Back says commitment.".into(),
                verdict: "Drop this in a limited run and pretend it was \u{201c}too hot to keep in stock.\u{201d}".into(),
                colors: vec![],
            },
        ];
        Self { products }
    }
}
