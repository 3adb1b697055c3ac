// SPDX-License-Identifier: MPL-2.0
//! `logi_portal` is a logistics management portal built with the Iced GUI framework.
//!
//! It covers inventory, orders, shipment documents and customer support behind a
//! demo sign-in, with Fluent localization and persisted user preferences.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
