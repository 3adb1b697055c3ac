// SPDX-License-Identifier: MPL-2.0
//! Interface translations.
//!
//! Catalogs for en-US, nl, de and fr are embedded from `assets/i18n/` at
//! build time. The active locale comes from `--lang`, then the saved
//! language, then the OS locale, and can be switched at runtime from the
//! Settings page. Missing keys render as `MISSING: <key>`.

pub mod fluent;
