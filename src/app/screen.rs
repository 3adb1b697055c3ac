// SPDX-License-Identifier: MPL-2.0
//! Authentication phase of the application.

/// Which top-level page is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Register,
    /// Signed in: sidebar, header and the active tab.
    Portal,
}
