// src/core/mod.rs

// Everything in `core` is independent of the terminal: the UI layer only
// reads from it.

/// Record types, classification enums and the session value.
pub mod models;

/// The compiled-in catalog of articles, CVEs, breaches and intel reports.
pub mod mock_data;

/// Generic filter/sort engine used by every list screen.
pub mod filter;

/// Filter controls and sort menus for each record type.
pub mod listing;

/// Relative times, compact counts and related-article selection.
pub mod presentation;

/// Remote login endpoint adapter.
pub mod auth;

/// Session ownership and persistence.
pub mod session;

/// Routes and the route guard.
pub mod router;
