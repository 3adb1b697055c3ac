// SPDX-License-Identifier: MPL-2.0
//! Customer orders and the track & trace history.

use super::day;
use super::search::{Categorized, Searchable};
use chrono::NaiveDate;

/// Tracking number that has a recorded history in the sample data.
pub const SAMPLE_TRACKING_NUMBER: &str = "TRK-001-2024";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Processing,
    InTransit,
    Delivered,
    Delayed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Processing,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
        OrderStatus::Delayed,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            OrderStatus::Processing => "order-status-processing",
            OrderStatus::InTransit => "order-status-in-transit",
            OrderStatus::Delivered => "order-status-delivered",
            OrderStatus::Delayed => "order-status-delayed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_number: String,
    pub customer: String,
    pub products: String,
    pub quantity: u32,
    pub status: OrderStatus,
    pub origin: String,
    pub destination: String,
    pub eta: NaiveDate,
    pub ets: NaiveDate,
    pub tracking_number: String,
    /// Whole euros.
    pub value_eur: u32,
}

impl Order {
    /// `"origin → destination"`.
    #[must_use]
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    #[must_use]
    pub fn value_label(&self) -> String {
        format_eur(self.value_eur)
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.order_number, &self.customer]
    }
}

impl Categorized for Order {
    type Category = OrderStatus;

    fn category(&self) -> OrderStatus {
        self.status
    }
}

/// Formats whole euros with comma thousands separators, e.g. `€45,230`.
#[must_use]
pub fn format_eur(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("€{grouped}")
}

/// One step in a shipment's tracking timeline, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingEvent {
    pub description: String,
    pub place: String,
    pub time: String,
}

/// Looks up the tracking timeline for a tracking number.
///
/// Matching ignores case and surrounding whitespace. Returns `None` when the
/// number has no recorded history.
#[must_use]
pub fn tracking_history(tracking_number: &str) -> Option<Vec<TrackingEvent>> {
    if !tracking_number
        .trim()
        .eq_ignore_ascii_case(SAMPLE_TRACKING_NUMBER)
    {
        return None;
    }
    let event = |description: &str, place: &str, time: &str| TrackingEvent {
        description: description.to_string(),
        place: place.to_string(),
        time: time.to_string(),
    };
    Some(vec![
        event("Package delivered to destination", "Rotterdam, NL", "15:30"),
        event("Out for delivery", "Rotterdam, NL", "08:00"),
        event(
            "Package arrived at distribution center",
            "Amsterdam, NL",
            "22:15",
        ),
    ])
}

#[allow(clippy::too_many_arguments)]
fn order(
    order_number: &str,
    customer: &str,
    products: &str,
    quantity: u32,
    status: OrderStatus,
    origin: &str,
    destination: &str,
    eta: NaiveDate,
    ets: NaiveDate,
    tracking_number: &str,
    value_eur: u32,
) -> Order {
    Order {
        order_number: order_number.to_string(),
        customer: customer.to_string(),
        products: products.to_string(),
        quantity,
        status,
        origin: origin.to_string(),
        destination: destination.to_string(),
        eta,
        ets,
        tracking_number: tracking_number.to_string(),
        value_eur,
    }
}

/// Sample active orders.
#[must_use]
pub fn sample_orders() -> Vec<Order> {
    vec![
        order(
            "ORD-2024-001",
            "ABC Manufacturing",
            "Industrial Bearings, Steel Components",
            150,
            OrderStatus::InTransit,
            "Hamburg, DE",
            "Rotterdam, NL",
            day(2024, 1, 18),
            day(2024, 1, 15),
            "TRK-001-2024",
            45_230,
        ),
        order(
            "ORD-2024-002",
            "TechCorp Solutions",
            "Electronic Components",
            75,
            OrderStatus::Processing,
            "Amsterdam, NL",
            "Berlin, DE",
            day(2024, 1, 20),
            day(2024, 1, 17),
            "TRK-002-2024",
            28_900,
        ),
        order(
            "ORD-2024-003",
            "BuildCo Ltd",
            "Safety Equipment",
            200,
            OrderStatus::Delivered,
            "Brussels, BE",
            "Paris, FR",
            day(2024, 1, 12),
            day(2024, 1, 10),
            "TRK-003-2024",
            15_650,
        ),
        order(
            "ORD-2024-004",
            "MegaCorp Industries",
            "Machinery Parts",
            50,
            OrderStatus::Delayed,
            "Antwerp, BE",
            "Milan, IT",
            day(2024, 1, 22),
            day(2024, 1, 19),
            "TRK-004-2024",
            67_800,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{RowFilter, Selection};

    #[test]
    fn euro_amounts_are_grouped() {
        assert_eq!(format_eur(45_230), "€45,230");
        assert_eq!(format_eur(999), "€999");
        assert_eq!(format_eur(0), "€0");
        assert_eq!(format_eur(1_234_567), "€1,234,567");
    }

    #[test]
    fn route_joins_origin_and_destination() {
        let orders = sample_orders();
        assert_eq!(orders[0].route(), "Hamburg, DE → Rotterdam, NL");
    }

    #[test]
    fn search_matches_customer() {
        let orders = sample_orders();
        let filter = RowFilter {
            query: "techcorp".into(),
            selection: Selection::All,
        };
        let rows = filter.apply(&orders);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].order_number, "ORD-2024-002");
    }

    #[test]
    fn search_ignores_route() {
        let orders = sample_orders();
        let filter = RowFilter {
            query: "Rotterdam".into(),
            selection: Selection::All,
        };
        assert!(filter.apply(&orders).is_empty());
    }

    #[test]
    fn status_filter_combines_with_search() {
        let orders = sample_orders();
        let filter = RowFilter {
            query: "ORD-2024".into(),
            selection: Selection::Only(OrderStatus::Delayed),
        };
        let rows = filter.apply(&orders);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer, "MegaCorp Industries");
    }

    #[test]
    fn tracking_lookup_ignores_case() {
        let history = tracking_history("trk-001-2024").expect("history");
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].description, "Package delivered to destination");
    }

    #[test]
    fn unknown_tracking_number_has_no_history() {
        assert!(tracking_history("TRK-002-2024").is_none());
        assert!(tracking_history("").is_none());
    }
}
