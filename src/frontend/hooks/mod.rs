//! Reusable hooks for common UI patterns

mod use_api_pagination;

pub use use_api_pagination::*;
