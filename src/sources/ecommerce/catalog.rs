//! Reference data for the simulated shop: services, products and id pools.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;

/// Simulated platform service that a log message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceModule {
    Search,
    Payment,
    Order,
    Cart,
    Inventory,
    Shipping,
    Review,
}

impl ServiceModule {
    pub const ALL: [ServiceModule; 7] = [
        ServiceModule::Search,
        ServiceModule::Payment,
        ServiceModule::Order,
        ServiceModule::Cart,
        ServiceModule::Inventory,
        ServiceModule::Shipping,
        ServiceModule::Review,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ServiceModule::Search => "SearchService",
            ServiceModule::Payment => "PaymentService",
            ServiceModule::Order => "OrderService",
            ServiceModule::Cart => "CartService",
            ServiceModule::Inventory => "InventoryService",
            ServiceModule::Shipping => "ShippingService",
            ServiceModule::Review => "ReviewService",
        }
    }
}

impl fmt::Display for ServiceModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named group of product names used for search queries.
#[derive(Debug, Clone)]
pub struct ProductCategory {
    pub name: &'static str,
    pub products: &'static [&'static str],
}

/// Disjoint inclusive id ranges for users, orders and products.
#[derive(Debug, Clone)]
pub struct IdentifierPools {
    pub user_ids: RangeInclusive<u32>,
    pub order_ids: RangeInclusive<u32>,
    pub product_ids: RangeInclusive<u32>,
}

impl Default for IdentifierPools {
    fn default() -> Self {
        Self {
            user_ids: 1001..=1500,
            order_ids: 2001..=2900,
            product_ids: 3001..=3050,
        }
    }
}

impl IdentifierPools {
    pub fn user_id(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.user_ids.clone())
    }

    pub fn order_id(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.order_ids.clone())
    }

    pub fn product_id(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.product_ids.clone())
    }
}

/// Immutable reference data shared by every generated event.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub categories: Vec<ProductCategory>,
    pub pools: IdentifierPools,
}

impl Catalog {
    /// The built-in shop: four product categories and the default id pools.
    pub fn standard() -> Self {
        Self {
            categories: vec![
                ProductCategory {
                    name: "electronics",
                    products: ELECTRONICS,
                },
                ProductCategory {
                    name: "appliances",
                    products: APPLIANCES,
                },
                ProductCategory {
                    name: "furniture",
                    products: FURNITURE,
                },
                ProductCategory {
                    name: "clothing",
                    products: CLOTHING,
                },
            ],
            pools: IdentifierPools::default(),
        }
    }

    /// Picks a category, then a product inside it.
    pub fn random_product(&self, rng: &mut impl Rng) -> Option<&'static str> {
        let category = self.categories.choose(rng)?;
        category.products.choose(rng).copied()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

const ELECTRONICS: &[&str] = &[
    "smartphone", "laptop", "4K TV", "headphones", "smartwatch", "tablet", "gaming console",
    "bluetooth speaker", "wireless earbuds", "VR headset", "home theater", "digital camera",
    "fitness tracker", "smart light", "drone", "portable charger", "noise-cancelling headphones",
    "smart thermostat", "e-reader", "smart lock", "dash cam", "smart glasses", "action camera",
    "robot vacuum", "gaming mouse", "gaming keyboard", "LED monitor", "mechanical keyboard",
    "external hard drive", "flash drive", "wireless router", "graphics card", "motherboard",
    "processor", "RAM", "SSD", "soundbar", "projector", "webcam", "video doorbell",
    "surge protector", "power bank", "WiFi extender", "PC case", "gaming chair", "microphone",
    "monitor stand", "green screen", "laptop stand", "USB hub", "cooling pad",
];

const APPLIANCES: &[&str] = &[
    "washing machine", "microwave oven", "refrigerator", "air conditioner", "dishwasher",
    "vacuum cleaner", "electric kettle", "toaster", "coffee maker", "blender", "food processor",
    "induction cooktop", "water purifier", "iron", "water heater", "juicer", "sandwich maker",
    "rice cooker", "pressure cooker", "hand mixer", "oven toaster grill", "air fryer", "deep fryer",
    "electric stove", "grill machine", "slow cooker", "popcorn maker", "steam iron",
    "espresso machine", "stand mixer", "ice maker", "garment steamer", "dehumidifier",
    "humidifier", "heater", "ceiling fan", "exhaust fan", "mop", "floor cleaner", "window AC",
    "split AC", "tower fan", "robotic vacuum", "hair dryer", "electric shaver", "sewing machine",
    "dish dryer", "wine cooler", "chest freezer",
];

const FURNITURE: &[&str] = &[
    "sofa", "dining table", "office chair", "bookshelf", "TV stand", "coffee table", "bed frame",
    "wardrobe", "nightstand", "dressing table", "recliner", "study desk", "console table",
    "sectional sofa", "shoe rack", "bar stool", "kitchen cabinet", "rocking chair", "armchair",
    "storage bench", "garden bench", "deck chair", "outdoor sofa", "hammock", "folding chair",
    "ottoman", "bean bag", "drawer chest", "sideboard", "display cabinet", "kitchen island",
    "kitchen cart", "patio table", "lawn chair", "accent chair", "corner shelf", "headboard",
    "dining bench", "coat rack", "umbrella stand", "laundry basket", "plant stand",
    "room divider", "writing desk", "console shelf", "jewelry armoire", "vanity mirror",
    "massage chair", "chaise lounge",
];

const CLOTHING: &[&str] = &[
    "t-shirt", "jeans", "jacket", "dress", "shoes", "sneakers", "boots", "sweater", "hoodie",
    "polo shirt", "blazer", "suit", "trousers", "shorts", "skirt", "coat", "cardigan", "hat",
    "scarf", "gloves", "socks", "swimsuit", "tank top", "leggings", "sports bra", "raincoat",
    "flip-flops", "sandals", "belt", "handbag", "backpack", "wallet", "necklace", "earrings",
    "bracelet", "sunglasses", "watch", "ring", "hairband", "bikini", "overalls", "beanie",
    "headscarf", "tie", "bow tie", "stockings", "tights", "pajamas", "bathrobe", "work boots",
    "cycling gear",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn categories_are_populated() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.categories.len(), 4);
        for category in &catalog.categories {
            assert!(
                (45..=55).contains(&category.products.len()),
                "{} has {} products",
                category.name,
                category.products.len()
            );
        }
    }

    #[test]
    fn id_pools_are_disjoint() {
        let pools = IdentifierPools::default();
        assert!(pools.user_ids.end() < pools.order_ids.start());
        assert!(pools.order_ids.end() < pools.product_ids.start());
        assert_eq!(pools.user_ids.clone().count(), 500);
        assert_eq!(pools.order_ids.clone().count(), 900);
        assert_eq!(pools.product_ids.clone().count(), 50);
    }

    #[test]
    fn random_product_comes_from_catalog() {
        let catalog = Catalog::standard();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let product = catalog.random_product(&mut rng).expect("product");
            assert!(catalog
                .categories
                .iter()
                .any(|category| category.products.contains(&product)));
        }
    }

    #[test]
    fn module_names_match_the_platform() {
        let names: Vec<&str> = ServiceModule::ALL.iter().map(|module| module.name()).collect();
        assert_eq!(
            names,
            [
                "SearchService",
                "PaymentService",
                "OrderService",
                "CartService",
                "InventoryService",
                "ShippingService",
                "ReviewService"
            ]
        );
    }
}
