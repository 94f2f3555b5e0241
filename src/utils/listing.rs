// ============================================================================
// LISTING - Client-side filtering and slicing for the admin tables
// ============================================================================
// The backend has no pagination protocol; tables fetch everything and
// trim locally.
// ============================================================================

use crate::models::{Booking, Customer, Vendor};
use crate::utils::constants::DEFAULT_VISIBLE_ROWS;

/// First page of a table unless the admin asked for everything
pub fn visible_slice<T>(items: &[T], show_all: bool) -> &[T] {
    if show_all {
        items
    } else {
        &items[..items.len().min(DEFAULT_VISIBLE_ROWS)]
    }
}

pub fn filter_customers<'a>(
    customers: &'a [Customer],
    pack: Option<&str>,
    status: Option<&str>,
) -> Vec<&'a Customer> {
    let pack = pack.filter(|p| !p.is_empty());
    let status = status.filter(|s| !s.is_empty());

    customers
        .iter()
        .filter(|c| pack.map_or(true, |p| c.current_pack.as_deref() == Some(p)))
        .filter(|c| status.map_or(true, |s| c.status.as_deref() == Some(s)))
        .collect()
}

/// Distinct non-empty packs, in first-seen order
pub fn customer_pack_options(customers: &[Customer]) -> Vec<String> {
    let mut packs: Vec<String> = Vec::new();
    for pack in customers.iter().filter_map(|c| c.current_pack.as_deref()) {
        if !pack.is_empty() && !packs.iter().any(|p| p == pack) {
            packs.push(pack.to_string());
        }
    }
    packs
}

pub fn vendor_categories(vendors: &[Vendor]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in vendors.iter().filter_map(|v| v.category.as_deref()) {
        if !category.is_empty() && !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

/// Exact-match category/status filter; blank selections match everything
pub fn filter_vendors<'a>(
    vendors: &'a [Vendor],
    category: Option<&str>,
    status: Option<&str>,
) -> Vec<&'a Vendor> {
    let category = category.filter(|c| !c.is_empty());
    let status = status.filter(|s| !s.is_empty());

    vendors
        .iter()
        .filter(|v| category.map_or(true, |c| v.category.as_deref() == Some(c)))
        .filter(|v| status.map_or(true, |s| v.status.as_deref() == Some(s)))
        .collect()
}

/// Mirrors a successful block/unblock call onto the loaded rows
pub fn set_customer_blocked(customers: &mut [Customer], id: &str, blocked: bool) {
    for customer in customers.iter_mut().filter(|c| c.id == id) {
        customer.is_blocked = blocked;
    }
}

/// Blocking a vendor also moves it to `blocked`; unblocking re-approves it
pub fn set_vendor_blocked(vendors: &mut [Vendor], id: &str, blocked: bool) {
    for vendor in vendors.iter_mut().filter(|v| v.id == id) {
        vendor.is_blocked = blocked;
        vendor.status = Some(if blocked { "blocked" } else { "approved" }.to_string());
    }
}

/// Case-insensitive search over customer name and booked services
pub fn filter_bookings<'a>(bookings: &'a [Booking], search: &str) -> Vec<&'a Booking> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return bookings.iter().collect();
    }

    bookings
        .iter()
        .filter(|b| {
            b.customer_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
                || b.service_summary().to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub completed: usize,
}

pub fn booking_stats(bookings: &[Booking]) -> BookingStats {
    BookingStats {
        total: bookings.len(),
        completed: bookings.iter().filter(|b| b.is_completed()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn customer(pack: &str, status: &str) -> Customer {
        Customer {
            current_pack: Some(pack.to_string()),
            status: Some(status.to_string()),
            ..Customer::default()
        }
    }

    #[fixture]
    fn customers() -> Vec<Customer> {
        vec![
            customer("Gold", "Active"),
            customer("Silver", "Expired"),
            customer("Gold", "Expired"),
            customer("", "Pending"),
        ]
    }

    #[rstest]
    #[case(25, false, 10)]
    #[case(25, true, 25)]
    #[case(3, false, 3)]
    fn slice_caps_at_ten_rows(#[case] len: usize, #[case] show_all: bool, #[case] expected: usize) {
        let items: Vec<usize> = (0..len).collect();
        assert_eq!(visible_slice(&items, show_all).len(), expected);
    }

    #[rstest]
    #[case(Some("Gold"), None, 2)]
    #[case(Some("Gold"), Some("Expired"), 1)]
    #[case(None, Some("Pending"), 1)]
    #[case(Some(""), Some(""), 4)]
    fn customer_filters_combine(
        customers: Vec<Customer>,
        #[case] pack: Option<&str>,
        #[case] status: Option<&str>,
        #[case] expected: usize,
    ) {
        assert_eq!(filter_customers(&customers, pack, status).len(), expected);
    }

    #[rstest]
    fn pack_options_are_distinct_and_ordered(customers: Vec<Customer>) {
        assert_eq!(customer_pack_options(&customers), vec!["Gold", "Silver"]);
    }

    fn vendor(id: &str, category: &str, status: &str) -> Vendor {
        Vendor {
            id: id.to_string(),
            category: Some(category.to_string()),
            status: Some(status.to_string()),
            ..Vendor::default()
        }
    }

    #[rstest]
    #[case(Some("Spa"), None, 2)]
    #[case(Some("Spa"), Some("pending"), 1)]
    #[case(None, Some("approved"), 2)]
    #[case(Some(""), None, 3)]
    fn vendor_filters_combine(
        #[case] category: Option<&str>,
        #[case] status: Option<&str>,
        #[case] expected: usize,
    ) {
        let vendors = vec![
            vendor("v1", "Spa", "approved"),
            vendor("v2", "Spa", "pending"),
            vendor("v3", "Gym", "approved"),
        ];
        assert_eq!(filter_vendors(&vendors, category, status).len(), expected);
        assert_eq!(vendor_categories(&vendors), vec!["Spa", "Gym"]);
    }

    #[rstest]
    #[case(true, "blocked")]
    #[case(false, "approved")]
    fn vendor_block_updates_status(#[case] blocked: bool, #[case] status: &str) {
        let mut vendors = vec![vendor("v1", "Spa", "pending"), vendor("v2", "Spa", "pending")];

        set_vendor_blocked(&mut vendors, "v1", blocked);

        assert_eq!(vendors[0].is_blocked, blocked);
        assert_eq!(vendors[0].status.as_deref(), Some(status));
        assert_eq!(vendors[1].status.as_deref(), Some("pending"));
    }

    #[rstest]
    fn customer_block_touches_only_that_row() {
        let mut customers = vec![
            Customer { id: "c1".to_string(), ..Customer::default() },
            Customer { id: "c2".to_string(), ..Customer::default() },
        ];

        set_customer_blocked(&mut customers, "c2", true);

        assert!(!customers[0].is_blocked);
        assert!(customers[1].is_blocked);
    }

    #[rstest]
    fn booking_search_matches_name_or_service() {
        let bookings = vec![
            Booking {
                customer_name: Some("Ravi Kumar".to_string()),
                services: vec!["Grooming".to_string()],
                booking_status: Some("completed".to_string()),
                ..Booking::default()
            },
            Booking {
                customer_name: Some("Meera".to_string()),
                services: vec!["Walking".to_string(), "Bathing".to_string()],
                ..Booking::default()
            },
        ];

        assert_eq!(filter_bookings(&bookings, "ravi").len(), 1);
        assert_eq!(filter_bookings(&bookings, "BATH").len(), 1);
        assert_eq!(filter_bookings(&bookings, "  ").len(), 2);
        assert_eq!(booking_stats(&bookings), BookingStats { total: 2, completed: 1 });
    }
}
