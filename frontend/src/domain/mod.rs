//! Page services backing the two bill pages.
//!
//! One service instance is constructed per page view; nothing is shared
//! across navigations.

pub mod bills_service;
pub mod commands;
pub mod new_bill_service;
