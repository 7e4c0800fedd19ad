//! API types matching the FitMinds server

use serde::{Deserialize, Serialize};

/// Account role, as issued by the login endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Trainer,
    Admin,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Trainer => "trainer",
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }

    /// Root of the dashboard section this role belongs to
    pub fn dashboard_path(&self) -> String {
        format!("/dashboard/{}", self.as_str())
    }
}

/// Minimal user descriptor kept in the session.
///
/// Login only returns a token and a role, so `name` stays empty until a
/// profile fetch fills it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Authenticated session: token and user travel together
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

/// Member registration request
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub emergency_contact: String,
    /// YYYY-MM-DD
    pub dob: String,
}

/// Trainer application request
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerRegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub specialization: String,
    pub short_description: String,
}

/// Registration response (member and trainer)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
}

/// Invoice issued by the subscription "apply" endpoint; this endpoint
/// answers in snake_case, unlike the camelCase request bodies
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyResponse {
    pub invoice_id: String,
    pub status: String,
}

/// Unpaid invoice mirrored between the server and local storage.
///
/// Invariant: at most one per member at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingInvoice {
    pub invoice_id: String,
    pub status: String,
    pub plan: String,
    pub amount: u32,
}

/// Server-owned subscription state; the client only reads it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl SubscriptionStatus {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

/// Payment confirmation request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub payment_id: String,
    pub amount_paid: u32,
    pub payment_method: String,
    pub transaction_ref: String,
}

/// Payment confirmation response
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Equipment item from the inventory API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
}

/// New-equipment request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEquipmentRequest {
    pub equipment_name: String,
    pub description: String,
    pub status: String,
}

/// Facility room
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRoom {
    pub id: i64,
    pub room_name: String,
    pub capacity: u32,
}

/// New-room request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoomRequest {
    pub room_name: String,
    pub capacity: u32,
}

/// Class scheduling request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleClassRequest {
    pub class_name: String,
    pub trainer_id: i64,
    pub room_id: i64,
    /// ISO-8601
    pub start_time: String,
    pub end_time: String,
    pub max_capacity: u32,
    pub price: f64,
}

/// Trainer application awaiting admin review
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTrainer {
    pub trainer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub specialization: String,
    pub short_description: String,
    pub status: String,
}

/// High-level admin statistics
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_members: u64,
    pub active_trainers: u64,
    pub occupancy_rate: f64,
    pub monthly_revenue: f64,
}

/// Member absent long enough to be a churn risk
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurnRiskMember {
    pub member_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub days_since_last_visit: String,
}

/// Trainer performance report row
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerPerformance {
    pub trainer_name: String,
    pub classes_assigned: u32,
    pub performance_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_as_lowercase() {
        let json = serde_json::to_string(&Role::Trainer).unwrap();
        assert_eq!(json, "\"trainer\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn dashboard_paths_cover_every_role() {
        assert_eq!(Role::Member.dashboard_path(), "/dashboard/member");
        assert_eq!(Role::Trainer.dashboard_path(), "/dashboard/trainer");
        assert_eq!(Role::Admin.dashboard_path(), "/dashboard/admin");
        assert_eq!(Role::Staff.dashboard_path(), "/dashboard/staff");
    }

    #[test]
    fn login_response_maps_token_and_role() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"t1","role":"member"}"#).unwrap();
        assert_eq!(resp.token, "t1");
        assert_eq!(resp.role, Role::Member);
    }

    #[test]
    fn apply_response_reads_snake_case_fields() {
        let resp: ApplyResponse =
            serde_json::from_str(r#"{"invoice_id":"inv1","status":"pending"}"#).unwrap();
        assert_eq!(resp.invoice_id, "inv1");
        assert_eq!(resp.status, "pending");
    }

    #[test]
    fn subscription_status_defaults_to_inactive() {
        let sub: SubscriptionStatus = serde_json::from_str("{}").unwrap();
        assert!(!sub.is_active());
        let sub: SubscriptionStatus =
            serde_json::from_str(r#"{"status":"Active","plan":"Gold"}"#).unwrap();
        assert!(sub.is_active());
    }
}
