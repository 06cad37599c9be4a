//! Helpers shared by controllers: session user lookup, role gates, flash outcomes and page
//! context loading.

pub mod flash;
pub mod get_user;
pub mod page;
