// SPDX-License-Identifier: MPL-2.0
//! Domain layer - business records, sample datasets and their rules.
//!
//! Nothing in here knows about Iced. Views own instances of these types and
//! drive them through their `update` functions.
//!
//! # Modules
//!
//! - [`search`]: Shared row filtering ([`RowFilter`](search::RowFilter),
//!   [`Selection`](search::Selection))
//! - [`session`]: Demo authentication ([`UserProfile`](session::UserProfile))
//! - [`registration`]: Sign-up form rules ([`RegistrationForm`](registration::RegistrationForm))
//! - [`inventory`]: Stock items ([`InventoryItem`](inventory::InventoryItem))
//! - [`orders`]: Orders and tracking ([`Order`](orders::Order),
//!   [`TrackingEvent`](orders::TrackingEvent))
//! - [`documents`]: Shipment paperwork ([`Document`](documents::Document))
//! - [`communication`]: Chat, alerts and tickets
//! - [`dashboard`]: Overview figures
//! - [`settings`]: Regional preferences, team and sessions

pub mod communication;
pub mod dashboard;
pub mod documents;
pub mod inventory;
pub mod orders;
pub mod registration;
pub mod search;
pub mod session;
pub mod settings;

use chrono::{NaiveDate, NaiveDateTime};

/// Calendar day for sample records. Out-of-range parts yield the epoch.
pub(crate) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Minute-precision timestamp for sample records.
pub(crate) fn at(year: i32, month: u32, date: u32, hour: u32, minute: u32) -> NaiveDateTime {
    day(year, month, date)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_helpers_build_exact_values() {
        assert_eq!(day(2024, 1, 18).to_string(), "2024-01-18");
        assert_eq!(at(2024, 1, 15, 14, 30).to_string(), "2024-01-15 14:30:00");
    }

    #[test]
    fn out_of_range_parts_fall_back_to_epoch() {
        assert_eq!(day(2024, 2, 30), NaiveDate::default());
        assert_eq!(at(2024, 1, 15, 25, 0), NaiveDateTime::default());
    }
}
