//! # Service Catalog
//!
//! Static categories, provider listings, work galleries and promotions
//! shown on the browse screens.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    /// Icon name understood by the renderer
    pub icon: &'static str,
}

/// A provider offering one service inside a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderListing {
    pub id: &'static str,
    pub category_id: &'static str,
    pub provider_name: &'static str,
    pub service_name: &'static str,
    pub area: &'static str,
    pub owner: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

/// A photo of past work shown on a category's gallery screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub id: &'static str,
    pub category_id: &'static str,
    /// Bundled asset path
    pub image: &'static str,
    pub caption: &'static str,
}

/// A banner in the home-screen promotions carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Promotion {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

static CATEGORIES: [Category; 14] = [
    Category { id: "1", name: "Plumbing", icon: "pipe-wrench" },
    Category { id: "2", name: "Electrical", icon: "lightning-bolt" },
    Category { id: "3", name: "Cleaning", icon: "broom" },
    Category { id: "4", name: "Carpentry", icon: "saw-blade" },
    Category { id: "5", name: "Painting", icon: "format-paint" },
    Category { id: "6", name: "Flower Decoration", icon: "flower-tulip-outline" },
    Category { id: "7", name: "Metal Fabrication", icon: "factory" },
    Category { id: "8", name: "Catering", icon: "food-variant" },
    Category { id: "9", name: "POP & False Ceiling", icon: "wall" },
    Category { id: "10", name: "CCTV", icon: "video-security" },
    Category { id: "11", name: "CSC Services", icon: "laptop" },
    Category { id: "12", name: "Transportation", icon: "car" },
    Category { id: "13", name: "Exotic Fruits", icon: "fruit-cherries" },
    Category { id: "14", name: "Printing & Signage", icon: "printer" },
];

static LISTINGS: [ProviderListing; 8] = [
    ProviderListing {
        id: "101",
        category_id: "1",
        provider_name: "AquaFix Experts",
        service_name: "Full Home Plumbing",
        area: "Downtown",
        owner: "John Doe",
        phone: "+1 234 567 890",
        location: "123 Main St, Downtown",
        description: "Expert plumbing services for all your leaks and pipes.",
    },
    ProviderListing {
        id: "102",
        category_id: "1",
        provider_name: "Pipe Masters",
        service_name: "Emergency Repairs",
        area: "Uptown",
        owner: "Jane Smith",
        phone: "+1 987 654 321",
        location: "456 Oak Ave, Uptown",
        description: "24/7 emergency plumbing solutions.",
    },
    ProviderListing {
        id: "201",
        category_id: "2",
        provider_name: "Volt Solutions",
        service_name: "Wiring & Repairs",
        area: "Midtown",
        owner: "Mike Sparks",
        phone: "+1 111 222 333",
        location: "789 Electric Way, Midtown",
        description: "Certified electrical repairs and new installations.",
    },
    ProviderListing {
        id: "301",
        category_id: "3",
        provider_name: "Sparkle Clean",
        service_name: "Deep Cleaning",
        area: "Riverside",
        owner: "Sarah Clean",
        phone: "+1 444 555 666",
        location: "321 Riverside Dr, Riverside",
        description: "Professional deep cleaning for homes and offices.",
    },
    ProviderListing {
        id: "701",
        category_id: "7",
        provider_name: "Metal Fabrication Works",
        service_name: "Metal Fabrication Works",
        area: "Local",
        owner: "Muzammil",
        phone: "9739799487",
        location: "Local Area",
        description: "High quality metal fabrication and welding services.",
    },
    ProviderListing {
        id: "801",
        category_id: "8",
        provider_name: "Local Feast Caterers",
        service_name: "Party Catering - Small Events",
        area: "All Local Areas",
        owner: "Chef Ali",
        phone: "+1 555 123 4567",
        location: "Central Kitchen",
        description: "Specializing in quality catering for up to 50 guests. Customizable menu options.",
    },
    ProviderListing {
        id: "901",
        category_id: "9",
        provider_name: "Bulk Buy Solutions",
        service_name: "Wholesale Goods Purchase",
        area: "Industrial Zone",
        owner: "Ravi Kumar",
        phone: "+1 666 777 888",
        location: "Warehouse 42, Industrial Area",
        description: "Bulk procurement and delivery of wholesale goods.",
    },
    ProviderListing {
        id: "902",
        category_id: "9",
        provider_name: "Local Rides & Rentals",
        service_name: "Vehicle Rental",
        area: "All Local Areas",
        owner: "Suresh Singh",
        phone: "+1 999 000 111",
        location: "Main Terminal, City Center",
        description: "Affordable daily and weekly vehicle rental services.",
    },
];

static GALLERY: [GalleryItem; 9] = [
    // Stainless steel
    GalleryItem { id: "ss1", category_id: "7", image: "images/SS1.jpg", caption: "Custom Stainless Steel Railing" },
    GalleryItem { id: "ss2", category_id: "7", image: "images/SS2.jpg", caption: "Stainless Steel Kitchen Fabrication" },
    GalleryItem { id: "ss3", category_id: "7", image: "images/SS3.jpg", caption: "SS Balcony Safety Grill" },
    // Mild steel
    GalleryItem { id: "ms1", category_id: "7", image: "images/MS1.jpg", caption: "Heavy Duty Mild Steel Gate" },
    GalleryItem { id: "ms2", category_id: "7", image: "images/MS2.jpg", caption: "MS Staircase Railing" },
    GalleryItem { id: "ms3", category_id: "7", image: "images/MS3.jpg", caption: "Industrial MS Fabrication Work" },
    GalleryItem { id: "ms4", category_id: "7", image: "images/MS4.jpg", caption: "Custom MS Window Grill" },
    // Aluminium
    GalleryItem { id: "al1", category_id: "7", image: "images/Aluminium1.jpg", caption: "Aluminium Window Frame" },
    GalleryItem { id: "al2", category_id: "7", image: "images/Aluminium2.jpg", caption: "Sliding Aluminium Partition" },
];

static PROMOTIONS: [Promotion; 5] = [
    Promotion {
        id: "1",
        title: "Flat 50% OFF",
        subtitle: "On clothing & fashion brands",
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=500&auto=format&fit=crop&q=60",
    },
    Promotion {
        id: "2",
        title: "Weekend Special",
        subtitle: "Home cleaning starts at ₹199",
        image: "https://images.unsplash.com/photo-1581578731522-745d05db9a26?w=500&auto=format&fit=crop&q=60",
    },
    Promotion {
        id: "3",
        title: "Festive Offer",
        subtitle: "Up to 30% cashback on electronics",
        image: "https://images.unsplash.com/photo-1498049794561-7780e7231661?w=500&auto=format&fit=crop&q=60",
    },
    Promotion {
        id: "4",
        title: "New User Deal",
        subtitle: "Get first service free up to ₹250",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=500&auto=format&fit=crop&q=60",
    },
    Promotion {
        id: "5",
        title: "Plumbing Expert",
        subtitle: "Free inspection this Tuesday",
        image: "https://images.unsplash.com/photo-1581244277943-fe4a9c777189?w=500&auto=format&fit=crop&q=60",
    },
];

static CATEGORY_INDEX: Lazy<HashMap<&'static str, &'static Category>> =
    Lazy::new(|| CATEGORIES.iter().map(|c| (c.id, c)).collect());

static LISTING_INDEX: Lazy<HashMap<&'static str, &'static ProviderListing>> =
    Lazy::new(|| LISTINGS.iter().map(|l| (l.id, l)).collect());

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORY_INDEX.get(id).copied()
}

pub fn listings() -> &'static [ProviderListing] {
    &LISTINGS
}

pub fn listing_by_id(id: &str) -> Option<&'static ProviderListing> {
    LISTING_INDEX.get(id).copied()
}

pub fn listings_for_category(category_id: &str) -> Vec<&'static ProviderListing> {
    LISTINGS.iter().filter(|l| l.category_id == category_id).collect()
}

/// Case-insensitive substring search over provider and service names.
/// A blank query returns every listing.
pub fn search_listings(query: &str) -> Vec<&'static ProviderListing> {
    let needle = query.trim().to_lowercase();
    LISTINGS
        .iter()
        .filter(|l| {
            needle.is_empty()
                || l.provider_name.to_lowercase().contains(&needle)
                || l.service_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Gallery photos for one category, in display order. Empty for categories
/// without a gallery.
pub fn gallery_for_category(category_id: &str) -> Vec<&'static GalleryItem> {
    GALLERY.iter().filter(|g| g.category_id == category_id).collect()
}

pub fn promotions() -> &'static [Promotion] {
    &PROMOTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_by_id() {
        assert_eq!(category_by_id("7").map(|c| c.name), Some("Metal Fabrication"));
        assert!(category_by_id("99").is_none());
        assert_eq!(listing_by_id("301").map(|l| l.provider_name), Some("Sparkle Clean"));
    }

    #[test]
    fn listings_belong_to_known_categories() {
        for listing in listings() {
            assert!(category_by_id(listing.category_id).is_some(), "{}", listing.id);
        }
        let plumbing: Vec<_> = listings_for_category("1").iter().map(|l| l.id).collect();
        assert_eq!(plumbing, ["101", "102"]);
    }

    #[test]
    fn search_ignores_case() {
        let hits = search_listings("  PIPE ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "102");
        assert_eq!(search_listings("").len(), listings().len());
    }

    #[test]
    fn gallery_is_scoped_to_its_category() {
        let metal: Vec<_> = gallery_for_category("7").iter().map(|g| g.id).collect();
        assert_eq!(metal, ["ss1", "ss2", "ss3", "ms1", "ms2", "ms3", "ms4", "al1", "al2"]);
        assert_eq!(gallery_for_category("7")[3].caption, "Heavy Duty Mild Steel Gate");
        assert!(gallery_for_category("1").is_empty());
        assert!(gallery_for_category("99").is_empty());
    }

    #[test]
    fn promotions_keep_carousel_order() {
        let ids: Vec<_> = promotions().iter().map(|p| p.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert_eq!(promotions()[1].subtitle, "Home cleaning starts at ₹199");
        assert!(promotions().iter().all(|p| p.image.starts_with("https://")));
    }
}
