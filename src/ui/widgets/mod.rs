// src/ui/widgets/mod.rs

pub mod detail; // Article detail with related articles.
pub mod footer; // Key hints for the current screen.
pub mod home; // Dashboard: stats, breaking news, featured, trending.
pub mod list_view; // Generic search/filter/sort list screen.
pub mod loading; // Placeholder while the session is hydrating.
pub mod login;
pub mod nav;
pub mod rows; // Per-record list rows and previews.
