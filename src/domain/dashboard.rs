// SPDX-License-Identifier: MPL-2.0
//! Overview figures shown on the dashboard tab.

/// Direction of a stat's month-over-month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title_key: &'static str,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub message: String,
    pub time: String,
    pub kind: ActivityKind,
}

/// Capacity usage of one warehouse, 0 to 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseUtilization {
    pub name: String,
    pub percent: u8,
}

impl WarehouseUtilization {
    /// Utilization as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        f32::from(self.percent.min(100)) / 100.0
    }
}

#[must_use]
pub fn sample_stats() -> Vec<StatCard> {
    let stat = |title_key, value: &str, change: &str, trend| StatCard {
        title_key,
        value: value.to_string(),
        change: change.to_string(),
        trend,
    };
    vec![
        stat("dashboard-stat-total-inventory", "2,847", "+12%", Trend::Up),
        stat("dashboard-stat-pending-orders", "23", "-3%", Trend::Down),
        stat("dashboard-stat-in-transit", "156", "+8%", Trend::Up),
        stat("dashboard-stat-urgent-issues", "4", "+2", Trend::Up),
    ]
}

#[must_use]
pub fn sample_activity() -> Vec<Activity> {
    let activity = |message: &str, time: &str, kind| Activity {
        message: message.to_string(),
        time: time.to_string(),
        kind,
    };
    vec![
        activity(
            "Order #ORD-2024-001 shipped",
            "2 hours ago",
            ActivityKind::Success,
        ),
        activity(
            "Inventory updated for SKU-12345",
            "4 hours ago",
            ActivityKind::Info,
        ),
        activity("Delayed shipment reported", "6 hours ago", ActivityKind::Warning),
        activity("New order received", "8 hours ago", ActivityKind::Success),
    ]
}

#[must_use]
pub fn sample_warehouses() -> Vec<WarehouseUtilization> {
    [("Warehouse A", 85), ("Warehouse B", 62), ("Warehouse C", 91)]
        .into_iter()
        .map(|(name, percent)| WarehouseUtilization {
            name: name.to_string(),
            percent,
        })
        .collect()
}
