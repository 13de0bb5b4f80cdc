//! Sea-ORM mapping for the `Kols` table.
//!
//! The table predates this service and keeps its PascalCase column names, so
//! every field carries an explicit `column_name`. This service only reads the
//! table; inserts happen in the test fixtures and in the onboarding pipeline
//! that owns the schema.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Kols")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "KolID")]
    pub kol_id: i64,
    #[sea_orm(column_name = "UserProfileID")]
    pub user_profile_id: i64,
    #[sea_orm(column_name = "Code")]
    pub code: String,
    #[sea_orm(column_name = "Language")]
    pub language: String,
    #[sea_orm(column_name = "Education")]
    pub education: String,
    #[sea_orm(column_name = "ExpectedSalary")]
    pub expected_salary: f64,
    #[sea_orm(column_name = "ExpectedSalaryEnable")]
    pub expected_salary_enable: bool,
    #[sea_orm(column_name = "ChannelSettingTypeID")]
    pub channel_setting_type_id: i64,
    #[sea_orm(column_name = "IDFrontURL")]
    pub id_front_url: String,
    #[sea_orm(column_name = "IDBackURL")]
    pub id_back_url: String,
    #[sea_orm(column_name = "PortraitURL")]
    pub portrait_url: String,
    #[sea_orm(column_name = "PortraitRightURL")]
    pub portrait_right_url: String,
    #[sea_orm(column_name = "PortraitLeftURL")]
    pub portrait_left_url: String,
    #[sea_orm(column_name = "RewardID")]
    pub reward_id: i64,
    #[sea_orm(column_name = "PaymentMethodID")]
    pub payment_method_id: i64,
    #[sea_orm(column_name = "TestimonialsID")]
    pub testimonials_id: i64,
    #[sea_orm(column_name = "VerificationStatus")]
    pub verification_status: bool,
    #[sea_orm(column_name = "LivenessStatus")]
    pub liveness_status: bool,
    #[sea_orm(column_name = "Enabled")]
    pub enabled: bool,
    #[sea_orm(column_name = "Active")]
    pub active: bool,
    #[sea_orm(column_name = "IsRemove")]
    pub is_remove: bool,
    #[sea_orm(column_name = "IsOnBoarding")]
    pub is_on_boarding: bool,
    #[sea_orm(column_name = "ActiveDate")]
    pub active_date: DateTime<Utc>,
    #[sea_orm(column_name = "CreatedBy")]
    pub created_by: String,
    #[sea_orm(column_name = "CreatedDate")]
    pub created_date: DateTime<Utc>,
    #[sea_orm(column_name = "ModifiedBy")]
    pub modified_by: String,
    #[sea_orm(column_name = "ModifiedDate")]
    pub modified_date: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
