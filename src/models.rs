//! Wire-level response types.
//!
//! Field names on the wire are part of the public contract and follow the
//! PascalCase convention existing consumers already parse, including the
//! irregular ones like `KolID` and `IDFrontURL`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity;
use crate::pagination::PageRequest;

/// Outcome marker carried in every response envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResultStatus {
    /// The query ran and the page is exactly what was asked for.
    Success,
    /// The query ran, but one or more paging parameters were reset to their
    /// defaults first. `ErrorMessage` says which.
    PartialSuccess,
    /// The request was refused or the query failed. `KOL` is null.
    UnSuccess,
}

/// One KOL row as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct KolDto {
    #[serde(rename = "KolID")]
    pub kol_id: i64,
    #[serde(rename = "UserProfileID")]
    pub user_profile_id: i64,
    pub code: String,
    pub language: String,
    pub education: String,
    pub expected_salary: f64,
    pub expected_salary_enable: bool,
    #[serde(rename = "ChannelSettingTypeID")]
    pub channel_setting_type_id: i64,
    #[serde(rename = "IDFrontURL")]
    pub id_front_url: String,
    #[serde(rename = "IDBackURL")]
    pub id_back_url: String,
    #[serde(rename = "PortraitURL")]
    pub portrait_url: String,
    #[serde(rename = "PortraitRightURL")]
    pub portrait_right_url: String,
    #[serde(rename = "PortraitLeftURL")]
    pub portrait_left_url: String,
    #[serde(rename = "RewardID")]
    pub reward_id: i64,
    #[serde(rename = "PaymentMethodID")]
    pub payment_method_id: i64,
    #[serde(rename = "TestimonialsID")]
    pub testimonials_id: i64,
    pub verification_status: bool,
    pub liveness_status: bool,
    pub enabled: bool,
    pub active: bool,
    pub is_remove: bool,
    pub is_on_boarding: bool,
    pub active_date: DateTime<Utc>,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub modified_by: String,
    pub modified_date: DateTime<Utc>,
}

impl From<entity::Model> for KolDto {
    fn from(model: entity::Model) -> Self {
        Self {
            kol_id: model.kol_id,
            user_profile_id: model.user_profile_id,
            code: model.code,
            language: model.language,
            education: model.education,
            expected_salary: model.expected_salary,
            expected_salary_enable: model.expected_salary_enable,
            channel_setting_type_id: model.channel_setting_type_id,
            id_front_url: model.id_front_url,
            id_back_url: model.id_back_url,
            portrait_url: model.portrait_url,
            portrait_right_url: model.portrait_right_url,
            portrait_left_url: model.portrait_left_url,
            reward_id: model.reward_id,
            payment_method_id: model.payment_method_id,
            testimonials_id: model.testimonials_id,
            verification_status: model.verification_status,
            liveness_status: model.liveness_status,
            enabled: model.enabled,
            active: model.active,
            is_remove: model.is_remove,
            is_on_boarding: model.is_on_boarding,
            active_date: model.active_date,
            created_by: model.created_by,
            created_date: model.created_date,
            modified_by: model.modified_by,
            modified_date: model.modified_date,
        }
    }
}

/// Envelope returned by the listing route on every path, success or not.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct KolListResponse {
    /// Correlation id minted per request. Clients quote it when reporting
    /// problems; the same id appears in the server logs.
    pub guid: Uuid,
    pub result: ResultStatus,
    /// Empty on full success. Reset warnings on partial success, the refusal
    /// or failure message otherwise.
    pub error_message: String,
    pub page_index: u64,
    pub page_size: u64,
    /// Rows matching the query across all pages. Zero when no query ran.
    pub total_count: u64,
    /// The requested page, null when no query ran.
    #[serde(rename = "KOL")]
    pub kol: Option<Vec<KolDto>>,
}

impl KolListResponse {
    /// Envelope for a completed query. Turns into `PartialSuccess` when the
    /// paging resolution produced warnings.
    #[must_use]
    pub fn completed(guid: Uuid, page: &PageRequest, total_count: u64, kols: Vec<KolDto>) -> Self {
        let (result, error_message) = if page.warnings.is_empty() {
            (ResultStatus::Success, String::new())
        } else {
            (ResultStatus::PartialSuccess, page.warnings.join("; "))
        };
        Self {
            guid,
            result,
            error_message,
            page_index: page.index,
            page_size: page.size,
            total_count,
            kol: Some(kols),
        }
    }

    /// Envelope for a request that never produced rows: a rejection before
    /// the query, or a query failure.
    #[must_use]
    pub fn failure(guid: Uuid, page: &PageRequest, message: String) -> Self {
        Self {
            guid,
            result: ResultStatus::UnSuccess,
            error_message: message,
            page_index: page.index,
            page_size: page.size,
            total_count: 0,
            kol: None,
        }
    }
}
