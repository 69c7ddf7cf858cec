use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create the platform's schema
        manager
            .get_connection()
            .execute_unprepared("CREATE SCHEMA IF NOT EXISTS glowdesk_platform;")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("SET search_path TO glowdesk_platform, public;")
            .await?;

        // Grant the base DB user that executes all platform queries its privileges
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$ BEGIN
                    GRANT ALL PRIVILEGES ON DATABASE glowdesk TO glowdesk;
                    GRANT ALL ON SCHEMA glowdesk_platform TO glowdesk;

                    ALTER DEFAULT PRIVILEGES IN SCHEMA glowdesk_platform GRANT ALL ON TABLES TO glowdesk;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA glowdesk_platform GRANT ALL ON SEQUENCES TO glowdesk;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA glowdesk_platform GRANT ALL ON FUNCTIONS TO glowdesk;
                END $$;
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Revoke default privileges first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$ BEGIN
                    ALTER DEFAULT PRIVILEGES IN SCHEMA glowdesk_platform REVOKE ALL ON FUNCTIONS FROM glowdesk;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA glowdesk_platform REVOKE ALL ON SEQUENCES FROM glowdesk;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA glowdesk_platform REVOKE ALL ON TABLES FROM glowdesk;
                    REVOKE ALL ON SCHEMA glowdesk_platform FROM glowdesk;
                    REVOKE ALL PRIVILEGES ON DATABASE glowdesk FROM glowdesk;
                END $$;
            "#,
            )
            .await?;

        // Drop the schema (CASCADE will remove all objects in it)
        manager
            .get_connection()
            .execute_unprepared("DROP SCHEMA IF EXISTS glowdesk_platform CASCADE;")
            .await?;

        Ok(())
    }
}
