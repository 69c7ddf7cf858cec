use password_auth::generate_hash;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The hash is computed at migration time so the plaintext never
        // lands in the database or the migration history.
        let password_hash = generate_hash("change-me-before-first-login");

        let sql = format!(
            r#"
            INSERT INTO glowdesk_platform.users
                (id, email, password, first_name, last_name, display_name, created_at, updated_at)
            VALUES
                (gen_random_uuid(), 'admin@glowdesk.app', '{password_hash}', 'Admin', 'User', 'Admin User', now(), now())
            ON CONFLICT (email) DO NOTHING;
        "#
        );

        manager.get_connection().execute_unprepared(&sql).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DELETE FROM glowdesk_platform.users WHERE email = 'admin@glowdesk.app';",
            )
            .await?;

        Ok(())
    }
}
