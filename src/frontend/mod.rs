//! Leptos CSR frontend: the pagination hook and the admin pages that
//! consume it. Built with Trunk; compiled only with the `frontend`
//! feature.

pub mod api;
pub mod app;
pub mod components;
pub mod hooks;
pub mod models;
pub mod nav;
pub mod pages;
