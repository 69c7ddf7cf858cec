use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TYPE glowdesk_platform.appointment_status AS ENUM (
                    'pending', 'confirmed', 'cancelled', 'completed'
                );

                CREATE TYPE glowdesk_platform.customer_response AS ENUM (
                    'pending', 'confirmed', 'declined'
                );

                CREATE TYPE glowdesk_platform.waitlist_status AS ENUM (
                    'waiting', 'notified', 'fulfilled', 'removed'
                );

                CREATE TABLE glowdesk_platform.tenants (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    name text NOT NULL,
                    slug text NOT NULL UNIQUE,
                    contact_email text,
                    contact_phone text,
                    logo text,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE glowdesk_platform.users (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    email text NOT NULL UNIQUE,
                    password text NOT NULL,
                    first_name text NOT NULL,
                    last_name text NOT NULL,
                    display_name text,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE glowdesk_platform.customers (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    tenant_id uuid NOT NULL REFERENCES glowdesk_platform.tenants(id) ON DELETE CASCADE,
                    first_name text NOT NULL,
                    last_name text NOT NULL,
                    email text,
                    phone text,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE glowdesk_platform.employees (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    tenant_id uuid NOT NULL REFERENCES glowdesk_platform.tenants(id) ON DELETE CASCADE,
                    first_name text NOT NULL,
                    last_name text NOT NULL,
                    role_title text,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE glowdesk_platform.services (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    tenant_id uuid NOT NULL REFERENCES glowdesk_platform.tenants(id) ON DELETE CASCADE,
                    name text NOT NULL,
                    description text,
                    duration_minutes integer NOT NULL,
                    price_cents bigint NOT NULL,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE glowdesk_platform.appointments (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    tenant_id uuid NOT NULL REFERENCES glowdesk_platform.tenants(id) ON DELETE CASCADE,
                    customer_id uuid NOT NULL REFERENCES glowdesk_platform.customers(id) ON DELETE CASCADE,
                    service_id uuid NOT NULL REFERENCES glowdesk_platform.services(id),
                    employee_id uuid REFERENCES glowdesk_platform.employees(id) ON DELETE SET NULL,
                    starts_at timestamptz NOT NULL,
                    ends_at timestamptz,
                    status glowdesk_platform.appointment_status NOT NULL DEFAULT 'pending',
                    customer_response glowdesk_platform.customer_response NOT NULL DEFAULT 'pending',
                    confirmation_token uuid NOT NULL UNIQUE,
                    confirmed_at timestamptz,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE glowdesk_platform.waitlist_entries (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    tenant_id uuid NOT NULL REFERENCES glowdesk_platform.tenants(id) ON DELETE CASCADE,
                    customer_id uuid NOT NULL REFERENCES glowdesk_platform.customers(id) ON DELETE CASCADE,
                    service_id uuid NOT NULL REFERENCES glowdesk_platform.services(id) ON DELETE CASCADE,
                    requested_date date,
                    status glowdesk_platform.waitlist_status NOT NULL DEFAULT 'waiting',
                    notes text,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE glowdesk_platform.packages (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    tenant_id uuid NOT NULL REFERENCES glowdesk_platform.tenants(id) ON DELETE CASCADE,
                    name text NOT NULL,
                    description text,
                    session_count integer NOT NULL,
                    price_cents bigint NOT NULL,
                    valid_for_days integer,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE glowdesk_platform.social_accounts (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    tenant_id uuid NOT NULL REFERENCES glowdesk_platform.tenants(id) ON DELETE CASCADE,
                    platform text NOT NULL,
                    handle text NOT NULL,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE glowdesk_platform.social_posts (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    social_account_id uuid NOT NULL REFERENCES glowdesk_platform.social_accounts(id) ON DELETE CASCADE,
                    caption text,
                    permalink text NOT NULL,
                    posted_at timestamptz NOT NULL,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );

                CREATE TABLE glowdesk_platform.social_reviews (
                    id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                    tenant_id uuid NOT NULL REFERENCES glowdesk_platform.tenants(id) ON DELETE CASCADE,
                    author text NOT NULL,
                    rating smallint NOT NULL,
                    body text NOT NULL,
                    reviewed_at timestamptz NOT NULL,
                    created_at timestamptz NOT NULL DEFAULT now(),
                    updated_at timestamptz NOT NULL DEFAULT now()
                );
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
                DROP TABLE IF EXISTS glowdesk_platform.social_reviews;
                DROP TABLE IF EXISTS glowdesk_platform.social_posts;
                DROP TABLE IF EXISTS glowdesk_platform.social_accounts;
                DROP TABLE IF EXISTS glowdesk_platform.packages;
                DROP TABLE IF EXISTS glowdesk_platform.waitlist_entries;
                DROP TABLE IF EXISTS glowdesk_platform.appointments;
                DROP TABLE IF EXISTS glowdesk_platform.services;
                DROP TABLE IF EXISTS glowdesk_platform.employees;
                DROP TABLE IF EXISTS glowdesk_platform.customers;
                DROP TABLE IF EXISTS glowdesk_platform.users;
                DROP TABLE IF EXISTS glowdesk_platform.tenants;
                DROP TYPE IF EXISTS glowdesk_platform.waitlist_status;
                DROP TYPE IF EXISTS glowdesk_platform.customer_response;
                DROP TYPE IF EXISTS glowdesk_platform.appointment_status;
            "#,
            )
            .await?;

        Ok(())
    }
}
