pub use sea_orm_migration::prelude::*;

mod m20260301_000001_users;
mod m20260301_000002_applications;
mod m20260301_000003_books;
mod m20260301_000004_royalties;
mod m20260301_000005_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_users::Migration),
            Box::new(m20260301_000002_applications::Migration),
            Box::new(m20260301_000003_books::Migration),
            Box::new(m20260301_000004_royalties::Migration),
            Box::new(m20260301_000005_notifications::Migration),
        ]
    }
}
