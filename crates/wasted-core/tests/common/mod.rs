#![allow(dead_code)]

use wasted_core::catalog::{Product, Variant};

/// Product with the given variants, in order.
pub fn product_with_variants(colors: &[(&str, &str)]) -> Product {
    Product {
        id: 3,
        name: "Wasted Fire Tee".into(),
        image: "/Tees/FireTees/wastedfire.png".into(),
        price: "$29.99".into(),
        sizes: "S, M, L, XL".into(),
        description: "Color splash!".into(),
        verdict: "Keep this for a collab.".into(),
        colors: colors
            .iter()
            .map(|(color, image)| Variant::new(*color, *image))
            .collect(),
    }
}

/// Two-color product: cyan then gold.
pub fn cyan_gold_tee() -> Product {
    product_with_variants(&[
        ("cyan", "/Tees/FireTees/cyanwastedfire.png"),
        ("gold", "/Tees/FireTees/goldenwastedfire.png"),
    ])
}

/// Product without variants.
pub fn plain_tee() -> Product {
    Product {
        id: 2,
        name: "Logo Tee".into(),
        image: "/Tees/minimalfrontlogo.png".into(),
        price: "$19.99".into(),
        sizes: "S, M, L, XL".into(),
        description: "Reserved in front, full villain arc in the back.".into(),
        verdict: "Vintage in 2032.".into(),
        colors: vec![],
    }
}

pub const CYAN: &str = "/Tees/FireTees/cyanwastedfire.png";
pub const GOLD: &str = "/Tees/FireTees/goldenwastedfire.png";
