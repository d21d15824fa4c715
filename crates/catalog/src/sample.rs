//! Sample catalog used by demos, tests and benchmarks.

use stockroom_core::ProductId;

use crate::product::Product;

/// The three seed products every demo session starts with. Prices are in
/// smallest currency unit (19999 = 199.99).
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("p-101"),
            name: "Wireless Headphones".to_string(),
            image: "https://store.storeimages.cdn-apple.com/1/as-images.apple.com/is/MQTR3"
                .to_string(),
            category: "Electronics".to_string(),
            description: String::new(),
            specs: String::new(),
            rating: 0.0,
            price: 19999,
            quantity: 5,
        },
        Product {
            id: ProductId::new("p-102"),
            name: "Coffee Maker".to_string(),
            image: "https://ts2.mm.bing.net/th?id=OIP.gKKTQrXJowLIw07L8IwPPgHaHa&pid=15.1"
                .to_string(),
            category: "Home".to_string(),
            description: String::new(),
            specs: String::new(),
            rating: 0.0,
            price: 8950,
            quantity: 5,
        },
        Product {
            id: ProductId::new("p-103"),
            name: "Running Shoes".to_string(),
            image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff".to_string(),
            category: "Sports".to_string(),
            description: "Lightweight shoes designed for road running.".to_string(),
            specs: "Breathable mesh; cushioned sole".to_string(),
            rating: 4.7,
            price: 12000,
            quantity: 9,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let products = sample_catalog();
        assert_eq!(products.len(), 3);
        for (i, a) in products.iter().enumerate() {
            for b in &products[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn sample_matches_seed_data() {
        let products = sample_catalog();
        assert_eq!(products[0].id, ProductId::new("p-101"));
        assert_eq!(products[0].price, 19999);
        assert_eq!(products[0].quantity, 5);
        assert_eq!(products[2].quantity, 9);
    }
}
