use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The calendar view reads appointments by tenant and start time; the
        // waitlist view reads entries by tenant in arrival order.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_appointments_tenant_starts_at
                    ON glowdesk_platform.appointments (tenant_id, starts_at);

                CREATE INDEX IF NOT EXISTS idx_waitlist_entries_tenant_created_at
                    ON glowdesk_platform.waitlist_entries (tenant_id, created_at);
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS glowdesk_platform.idx_waitlist_entries_tenant_created_at;
                DROP INDEX IF EXISTS glowdesk_platform.idx_appointments_tenant_starts_at;
            "#,
            )
            .await?;

        Ok(())
    }
}
