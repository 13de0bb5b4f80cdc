use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ActiveValue::Set, Database, DatabaseConnection, DbErr, EntityTrait};
use sea_orm_migration::prelude::*;
use tower::ServiceExt;

use kol_event_api::entity;
use kol_event_api::models::KolListResponse;
use kol_event_api::routes;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn setup_test_app(db: DatabaseConnection) -> Router {
    routes::router(db)
}

/// Baseline instant the seeded rows hang off. Row N is created N days after
/// this, so date-range assertions can be written against exact day offsets.
pub fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// One fully-populated row with values derived from `kol_id`. Tests override
/// individual fields before inserting.
#[allow(clippy::cast_precision_loss)]
pub fn kol(kol_id: i64) -> entity::ActiveModel {
    let created = base_instant() + Duration::days(kol_id);
    entity::ActiveModel {
        kol_id: Set(kol_id),
        user_profile_id: Set(1000 + kol_id),
        code: Set(format!("KOL{kol_id:04}")),
        language: Set("Vietnamese".to_owned()),
        education: Set("Bachelor".to_owned()),
        expected_salary: Set(1000.0 + kol_id as f64),
        expected_salary_enable: Set(true),
        channel_setting_type_id: Set(1),
        id_front_url: Set(format!("https://cdn.example.com/kols/{kol_id}/id-front.jpg")),
        id_back_url: Set(format!("https://cdn.example.com/kols/{kol_id}/id-back.jpg")),
        portrait_url: Set(format!("https://cdn.example.com/kols/{kol_id}/portrait.jpg")),
        portrait_right_url: Set(format!(
            "https://cdn.example.com/kols/{kol_id}/portrait-right.jpg"
        )),
        portrait_left_url: Set(format!(
            "https://cdn.example.com/kols/{kol_id}/portrait-left.jpg"
        )),
        reward_id: Set(1),
        payment_method_id: Set(1),
        testimonials_id: Set(1),
        verification_status: Set(true),
        liveness_status: Set(true),
        enabled: Set(true),
        active: Set(true),
        is_remove: Set(false),
        is_on_boarding: Set(false),
        active_date: Set(created),
        created_by: Set("importer".to_owned()),
        created_date: Set(created),
        modified_by: Set("importer".to_owned()),
        modified_date: Set(created),
    }
}

pub async fn insert_kols(db: &DatabaseConnection, models: Vec<entity::ActiveModel>) {
    entity::Entity::insert_many(models)
        .exec(db)
        .await
        .expect("Failed to seed Kols");
}

/// Seeds one row per id in the range, with default values from [`kol`].
pub async fn seed_range(db: &DatabaseConnection, ids: std::ops::RangeInclusive<i64>) {
    insert_kols(db, ids.map(kol).collect()).await;
}

/// Fires a GET at the app and decodes the response envelope.
pub async fn get_kols_response(app: &Router, uri: &str) -> (StatusCode, KolListResponse) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let envelope: KolListResponse =
        serde_json::from_slice(&body).unwrap_or_else(|err| panic!("bad envelope: {err}"));
    (status, envelope)
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateKolsTable)]
    }
}

pub struct CreateKolsTable;

#[async_trait::async_trait]
impl MigrationName for CreateKolsTable {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_kols_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateKolsTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(KolsTable)
            .if_not_exists()
            .col(
                ColumnDef::new(KolsColumn::KolId)
                    .big_integer()
                    .not_null()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(KolsColumn::UserProfileId)
                    .big_integer()
                    .not_null(),
            )
            .col(ColumnDef::new(KolsColumn::Code).string().not_null())
            .col(ColumnDef::new(KolsColumn::Language).string().not_null())
            .col(ColumnDef::new(KolsColumn::Education).string().not_null())
            .col(
                ColumnDef::new(KolsColumn::ExpectedSalary)
                    .double()
                    .not_null(),
            )
            .col(
                ColumnDef::new(KolsColumn::ExpectedSalaryEnable)
                    .boolean()
                    .not_null(),
            )
            .col(
                ColumnDef::new(KolsColumn::ChannelSettingTypeId)
                    .big_integer()
                    .not_null(),
            )
            .col(ColumnDef::new(KolsColumn::IdFrontUrl).string().not_null())
            .col(ColumnDef::new(KolsColumn::IdBackUrl).string().not_null())
            .col(ColumnDef::new(KolsColumn::PortraitUrl).string().not_null())
            .col(
                ColumnDef::new(KolsColumn::PortraitRightUrl)
                    .string()
                    .not_null(),
            )
            .col(
                ColumnDef::new(KolsColumn::PortraitLeftUrl)
                    .string()
                    .not_null(),
            )
            .col(ColumnDef::new(KolsColumn::RewardId).big_integer().not_null())
            .col(
                ColumnDef::new(KolsColumn::PaymentMethodId)
                    .big_integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(KolsColumn::TestimonialsId)
                    .big_integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(KolsColumn::VerificationStatus)
                    .boolean()
                    .not_null(),
            )
            .col(
                ColumnDef::new(KolsColumn::LivenessStatus)
                    .boolean()
                    .not_null(),
            )
            .col(ColumnDef::new(KolsColumn::Enabled).boolean().not_null())
            .col(ColumnDef::new(KolsColumn::Active).boolean().not_null())
            .col(ColumnDef::new(KolsColumn::IsRemove).boolean().not_null())
            .col(
                ColumnDef::new(KolsColumn::IsOnBoarding)
                    .boolean()
                    .not_null(),
            )
            .col(
                ColumnDef::new(KolsColumn::ActiveDate)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(ColumnDef::new(KolsColumn::CreatedBy).string().not_null())
            .col(
                ColumnDef::new(KolsColumn::CreatedDate)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(ColumnDef::new(KolsColumn::ModifiedBy).string().not_null())
            .col(
                ColumnDef::new(KolsColumn::ModifiedDate)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KolsTable).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum KolsColumn {
    KolId,
    UserProfileId,
    Code,
    Language,
    Education,
    ExpectedSalary,
    ExpectedSalaryEnable,
    ChannelSettingTypeId,
    IdFrontUrl,
    IdBackUrl,
    PortraitUrl,
    PortraitRightUrl,
    PortraitLeftUrl,
    RewardId,
    PaymentMethodId,
    TestimonialsId,
    VerificationStatus,
    LivenessStatus,
    Enabled,
    Active,
    IsRemove,
    IsOnBoarding,
    ActiveDate,
    CreatedBy,
    CreatedDate,
    ModifiedBy,
    ModifiedDate,
}

impl Iden for KolsColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::KolId => "KolID",
                Self::UserProfileId => "UserProfileID",
                Self::Code => "Code",
                Self::Language => "Language",
                Self::Education => "Education",
                Self::ExpectedSalary => "ExpectedSalary",
                Self::ExpectedSalaryEnable => "ExpectedSalaryEnable",
                Self::ChannelSettingTypeId => "ChannelSettingTypeID",
                Self::IdFrontUrl => "IDFrontURL",
                Self::IdBackUrl => "IDBackURL",
                Self::PortraitUrl => "PortraitURL",
                Self::PortraitRightUrl => "PortraitRightURL",
                Self::PortraitLeftUrl => "PortraitLeftURL",
                Self::RewardId => "RewardID",
                Self::PaymentMethodId => "PaymentMethodID",
                Self::TestimonialsId => "TestimonialsID",
                Self::VerificationStatus => "VerificationStatus",
                Self::LivenessStatus => "LivenessStatus",
                Self::Enabled => "Enabled",
                Self::Active => "Active",
                Self::IsRemove => "IsRemove",
                Self::IsOnBoarding => "IsOnBoarding",
                Self::ActiveDate => "ActiveDate",
                Self::CreatedBy => "CreatedBy",
                Self::CreatedDate => "CreatedDate",
                Self::ModifiedBy => "ModifiedBy",
                Self::ModifiedDate => "ModifiedDate",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct KolsTable;

impl Iden for KolsTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "Kols").unwrap();
    }
}
