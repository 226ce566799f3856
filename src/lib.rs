//! URL-synchronized pagination for admin list views.
//!
//! The framework-free core is always available: [`paging`] holds the
//! pagination data model and query-string codec, [`nav`] the
//! navigation-service seam the pagination hook talks to instead of
//! ambient browser state.
//!
//! The Leptos frontend (the hook itself, the API client, and the admin
//! pages consuming it) lives under [`frontend`], gated behind the
//! `frontend` feature, and is built with Trunk.

pub mod nav;
pub mod paging;

#[cfg(feature = "frontend")]
pub mod frontend;
