//! Application state for the DocuGen API

use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::Config;
use crate::convert::PdfConverter;
use crate::render::DocumentRenderer;

pub struct AppState {
    pub db: SqlitePool,
    pub renderer: DocumentRenderer,
    pub converter: PdfConverter,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        tracing::info!("Connecting to database: {}", config.database_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self {
            db: pool,
            renderer: DocumentRenderer::new()?,
            converter: PdfConverter::new(
                config.convert_endpoint.clone(),
                config.convert_api_key.clone(),
            ),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS submissions (
                id TEXT PRIMARY KEY,
                full_name TEXT NOT NULL,
                email TEXT NOT NULL,
                mobile TEXT NOT NULL,
                company TEXT NOT NULL,
                role TEXT NOT NULL,
                address TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                pin_code TEXT NOT NULL,
                date_of_submission TEXT NOT NULL,
                remarks TEXT,
                pdf_url TEXT,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        // The list endpoint orders by recency
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_submissions_created_at ON submissions(created_at)
            "#,
        )
        .execute(pool)
        .await?;

        tracing::info!("Migrations complete");
        Ok(())
    }
}
