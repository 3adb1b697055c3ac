// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across the portal pages.
//!
//! # Components
//!
//! - [`badge`] - Status pills and counters with a [`Tone`](badge::Tone)
//! - [`card`] - Cards, section cards, page headings, stat tiles, avatars
//! - [`form`] - Labeled fields, settings rows, localized pick-list choices
//!   and sub-tab bars
//! - [`table`] - Proportional-width data tables with an empty state

pub mod badge;
pub mod card;
pub mod form;
pub mod table;
