// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`login`] - Sign-in form with the demo credentials hint
//! - [`register`] - Account creation with password strength feedback
//!
//! # Portal
//!
//! - [`sidebar`] - Tab navigation, user footer and sign-out
//! - [`header`] - Active tab heading and alert bell
//! - [`dashboard`] - Overview figures and recent activity
//! - [`inventory`] - Stock table with search and status filter
//! - [`orders`] - Active orders, history and Track & Trace
//! - [`documents`] - Shipment paperwork by category
//! - [`communication`] - Live chat, alerts and support tickets
//! - [`settings`] - Profile, notifications, language, team and security
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (cards, badges, tables, forms)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Glyph icons (visual primitives)
//! - [`notifications`] - Toast notification system for user feedback

pub mod communication;
pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod documents;
pub mod header;
pub mod icons;
pub mod inventory;
pub mod login;
pub mod notifications;
pub mod orders;
pub mod register;
pub mod settings;
pub mod sidebar;
pub mod styles;
pub mod theming;
