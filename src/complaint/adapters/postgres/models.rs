//! Diesel row models for complaint persistence.

use super::schema::complaints;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for complaint records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = complaints)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ComplaintRow {
    /// Storage identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// Order identifier.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub order_id: String,
    /// Complainant name.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub name: String,
    /// Complainant email.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub email: String,
    /// Complainant phone.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Varchar>)]
    pub phone: Option<String>,
    /// Description.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub description: String,
    /// Category label.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub complaint_type: String,
    /// Status label.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub status: String,
    /// Department label.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Varchar>)]
    pub department: Option<String>,
    /// Worker assignment JSON array.
    #[diesel(sql_type = diesel::sql_types::Jsonb)]
    pub assigned_workers: Value,
    /// Address.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub address: Option<String>,
    /// Latitude.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Float8>)]
    pub location_lat: Option<f64>,
    /// Longitude.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Float8>)]
    pub location_lng: Option<f64>,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub updated_at: DateTime<Utc>,
}

/// Insert model for complaint records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = complaints)]
pub struct NewComplaintRow {
    /// Storage identifier.
    pub id: uuid::Uuid,
    /// Order identifier.
    pub order_id: String,
    /// Complainant name.
    pub name: String,
    /// Complainant email.
    pub email: String,
    /// Complainant phone.
    pub phone: Option<String>,
    /// Description.
    pub description: String,
    /// Category label.
    pub complaint_type: String,
    /// Status label.
    pub status: String,
    /// Department label.
    pub department: Option<String>,
    /// Worker assignment JSON array.
    pub assigned_workers: Value,
    /// Address.
    pub address: Option<String>,
    /// Latitude.
    pub location_lat: Option<f64>,
    /// Longitude.
    pub location_lng: Option<f64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
