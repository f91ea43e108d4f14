// src/db/mod.rs

use anyhow::Context;
use sqlx::{migrate::Migrator, Pool, Postgres};

use crate::config::Config;

pub async fn connect(cfg: &Config) -> anyhow::Result<Pool<Postgres>> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect(&cfg.database_url)
        .await
        .context("connecting to PostgreSQL")?;

    tracing::info!(max_connections = cfg.max_connections, "connected to PostgreSQL");
    Ok(pool)
}

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Creates the dashboard tables if they are missing.
pub async fn migrate(pool: &Pool<Postgres>) -> anyhow::Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("applying schema migrations")?;
    tracing::info!("schema up to date");
    Ok(())
}
