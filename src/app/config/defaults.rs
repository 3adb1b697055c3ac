// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.
//!
//! # Categories
//!
//! - **Session**: Simulated network delays for login and registration
//! - **Notifications**: Toast auto-dismiss timings

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Simulated round-trip for a login request (in milliseconds).
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// Simulated round-trip for a registration request (in milliseconds).
pub const DEFAULT_REGISTER_DELAY_MS: u64 = 1500;

/// Upper bound for either simulated delay (in milliseconds).
pub const MAX_SESSION_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for success and info toasts (in milliseconds).
pub const TOAST_SHORT_DISMISS_MS: u64 = 3000;

/// Auto-dismiss delay for warning toasts (in milliseconds).
pub const TOAST_LONG_DISMISS_MS: u64 = 5000;

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Maximum number of toasts waiting for a free slot. The oldest is dropped
/// beyond this.
pub const MAX_QUEUED_TOASTS: usize = 5;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_LOGIN_DELAY_MS <= MAX_SESSION_DELAY_MS);
    assert!(DEFAULT_REGISTER_DELAY_MS <= MAX_SESSION_DELAY_MS);
    assert!(TOAST_SHORT_DISMISS_MS < TOAST_LONG_DISMISS_MS);
    assert!(MAX_VISIBLE_TOASTS > 0);
    assert!(MAX_QUEUED_TOASTS > 0);
};
