use axum::Router;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use kol_event_api::config::Config;
use kol_event_api::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env();
    let db: DatabaseConnection = Database::connect(&config.database_url).await?;
    if db.get_database_backend() == DbBackend::Sqlite {
        bootstrap_sqlite_schema(&db).await?;
    }

    let app: Router = routes::documented_router(db)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    tracing::info!("API documentation at /docs");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Creates the `Kols` table when running against SQLite, the self-contained
/// default. Server databases are expected to carry the schema already; it
/// belongs to the onboarding pipeline that writes these rows.
async fn bootstrap_sqlite_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        DbBackend::Sqlite,
        r#"
        CREATE TABLE IF NOT EXISTS "Kols" (
            "KolID" INTEGER PRIMARY KEY NOT NULL,
            "UserProfileID" INTEGER NOT NULL,
            "Code" TEXT NOT NULL,
            "Language" TEXT NOT NULL,
            "Education" TEXT NOT NULL,
            "ExpectedSalary" REAL NOT NULL,
            "ExpectedSalaryEnable" BOOLEAN NOT NULL,
            "ChannelSettingTypeID" INTEGER NOT NULL,
            "IDFrontURL" TEXT NOT NULL,
            "IDBackURL" TEXT NOT NULL,
            "PortraitURL" TEXT NOT NULL,
            "PortraitRightURL" TEXT NOT NULL,
            "PortraitLeftURL" TEXT NOT NULL,
            "RewardID" INTEGER NOT NULL,
            "PaymentMethodID" INTEGER NOT NULL,
            "TestimonialsID" INTEGER NOT NULL,
            "VerificationStatus" BOOLEAN NOT NULL,
            "LivenessStatus" BOOLEAN NOT NULL,
            "Enabled" BOOLEAN NOT NULL,
            "Active" BOOLEAN NOT NULL,
            "IsRemove" BOOLEAN NOT NULL,
            "IsOnBoarding" BOOLEAN NOT NULL,
            "ActiveDate" TEXT NOT NULL,
            "CreatedBy" TEXT NOT NULL,
            "CreatedDate" TEXT NOT NULL,
            "ModifiedBy" TEXT NOT NULL,
            "ModifiedDate" TEXT NOT NULL
        )
        "#,
    ))
    .await?;
    Ok(())
}
