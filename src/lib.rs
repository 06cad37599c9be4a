//! Contract desk: author contract applications, editorial approval and monthly royalties.

pub mod model;
pub mod server;
