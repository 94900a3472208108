//! Front-end core of the expense-claims application.
//!
//! Employees submit bills (expense claims) with a receipt file; the
//! application lists them with display-formatted fields and lets a user
//! create a new one. This crate holds the reviewable core of that front end:
//! the page services (`domain`), the remote store seam (`store`,
//! `services::api`), the display formatting (`services::format`) and the
//! typed contracts the host UI implements (`view`, `navigation`). Markup
//! production and the actual router live outside and are reached through
//! those contracts.

pub mod domain;
pub mod navigation;
pub mod services;
pub mod store;
pub mod view;
