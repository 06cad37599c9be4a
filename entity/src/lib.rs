pub mod prelude;

pub mod application;
pub mod book;
pub mod notification;
pub mod royalty;
pub mod sea_orm_active_enums;
pub mod user;
