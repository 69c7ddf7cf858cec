pub use sea_orm_migration::prelude::*;

mod m20240312_101500_create_schema_and_base_db_setup;
mod m20240312_103000_base_migration;
mod m20240313_090000_add_initial_admin_user;
mod m20240920_000000_add_dashboard_sorting_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240312_101500_create_schema_and_base_db_setup::Migration),
            Box::new(m20240312_103000_base_migration::Migration),
            Box::new(m20240313_090000_add_initial_admin_user::Migration),
            Box::new(m20240920_000000_add_dashboard_sorting_indexes::Migration),
        ]
    }
}
