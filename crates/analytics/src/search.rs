//! Case-insensitive substring search used by the list views.

use stockdesk_inventory::InventoryItem;
use stockdesk_vendors::Vendor;

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Items whose name or code contains `term`. An empty term matches everything.
pub fn search_items<'a>(items: &'a [InventoryItem], term: &str) -> Vec<&'a InventoryItem> {
    let needle = term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty() || contains_folded(item.name(), &needle) || contains_folded(item.code(), &needle)
        })
        .collect()
}

/// Vendors whose name or category label contains `term`.
pub fn search_vendors<'a>(vendors: &'a [Vendor], term: &str) -> Vec<&'a Vendor> {
    let needle = term.trim().to_lowercase();
    vendors
        .iter()
        .filter(|vendor| {
            needle.is_empty()
                || contains_folded(vendor.name(), &needle)
                || contains_folded(vendor.category().label(), &needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{categorized_vendor, item};
    use stockdesk_vendors::VendorCategory;

    #[test]
    fn items_match_on_name_or_code_ignoring_case() {
        let items = vec![item("Cotton Yarn", 5, 10), item("Buttons", 50, 10)];

        let hits: Vec<&str> = search_items(&items, "yarn").iter().map(|i| i.name()).collect();
        assert_eq!(hits, vec!["Cotton Yarn"]);

        // fixture codes are PREFIX + "001"
        let hits: Vec<&str> = search_items(&items, "but0").iter().map(|i| i.name()).collect();
        assert_eq!(hits, vec!["Buttons"]);

        assert_eq!(search_items(&items, "  ").len(), 2);
    }

    #[test]
    fn vendors_match_on_category_label() {
        let vendors = vec![
            categorized_vendor("Acme", 4, VendorCategory::FoodAndBeverages),
            categorized_vendor("Boxly", 3, VendorCategory::Packaging),
        ];
        let hits: Vec<&str> = search_vendors(&vendors, "food &").iter().map(|v| v.name()).collect();
        assert_eq!(hits, vec!["Acme"]);
        assert!(search_vendors(&vendors, "zzz").is_empty());
    }
}
