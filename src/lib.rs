//! HTTP service turning info banner campaigns into reviewable SQL scripts.
//!
//! Requests are parsed by [`presentation::http`], rendered into `INSERT` or
//! `UPDATE` statements by [`application::commands::info`] and appended to
//! `{YYYYMMDD}/{env}/{name}.sql` files by [`infrastructure::scripts`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
