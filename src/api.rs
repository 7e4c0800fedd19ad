//! API client for communicating with the FitMinds server

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::*;

/// Build a user-facing message out of a non-success response body.
///
/// Order: JSON `message` field, JSON `error` field, a bare JSON string,
/// the raw text body, then a generic fallback carrying the status code.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
        if let Some(msg) = value.get("error").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
        if let Some(msg) = value.as_str() {
            return msg.to_string();
        }
    }
    let text = body.trim();
    if !text.is_empty() {
        return text.to_string();
    }
    format!("Request failed with status {status}")
}

async fn reject(resp: Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_message(status, &body)
}

fn with_auth(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(t) => req.header("Authorization", &format!("Bearer {t}")),
        None => req,
    }
}

async fn send_and_parse<R: DeserializeOwned>(req: RequestBuilder) -> Result<R, String> {
    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !resp.ok() {
        return Err(reject(resp).await);
    }
    resp.json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

async fn send_and_drop(req: RequestBuilder) -> Result<(), String> {
    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !resp.ok() {
        return Err(reject(resp).await);
    }
    Ok(())
}

/// Authenticated GET returning JSON
pub async fn get_json<R: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<R, String> {
    send_and_parse(with_auth(Request::get(url), token)).await
}

/// POST with a JSON body
pub async fn post_json<T, R>(url: &str, body: &T, token: Option<&str>) -> Result<R, String>
where
    T: Serialize,
    R: DeserializeOwned,
{
    let req = with_auth(
        Request::post(url).header("Content-Type", "application/json"),
        token,
    )
    .json(body)
    .map_err(|e| format!("Failed to serialize request: {e}"))?;

    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !resp.ok() {
        return Err(reject(resp).await);
    }
    resp.json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

/// POST without a body (query-parameter style endpoints)
pub async fn post_empty<R: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<R, String> {
    send_and_parse(with_auth(Request::post(url), token)).await
}

pub async fn delete(url: &str, token: Option<&str>) -> Result<(), String> {
    send_and_drop(with_auth(Request::delete(url), token)).await
}

pub async fn patch(url: &str, token: Option<&str>) -> Result<(), String> {
    send_and_drop(with_auth(Request::patch(url), token)).await
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Login; the resolved session is returned directly so callers never have to
/// re-read storage to learn the role.
pub async fn login(base: &str, email: &str, password: &str) -> Result<Session, String> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let resp: LoginResponse = post_json(&format!("{base}/api/auth/login"), &body, None).await?;
    Ok(Session {
        token: resp.token,
        user: User {
            email: email.to_string(),
            role: resp.role,
            name: None,
        },
    })
}

/// Register a new member; a fresh account cannot have a pending invoice
pub async fn register_member(
    base: &str,
    data: &MemberRegisterRequest,
) -> Result<Session, String> {
    let resp: RegisterResponse =
        post_json(&format!("{base}/api/auth/register/member"), data, None).await?;
    Ok(Session {
        token: resp.token,
        user: User {
            email: data.email.clone(),
            role: Role::Member,
            name: None,
        },
    })
}

/// Submit a trainer application
pub async fn register_trainer(
    base: &str,
    data: &TrainerRegisterRequest,
) -> Result<Session, String> {
    let resp: RegisterResponse =
        post_json(&format!("{base}/api/auth/register/trainer"), data, None).await?;
    Ok(Session {
        token: resp.token,
        user: User {
            email: data.email.clone(),
            role: Role::Trainer,
            name: None,
        },
    })
}

/// Profile fetch is non-fatal: no token or a failed request both yield None
pub async fn fetch_profile(base: &str, token: Option<&str>) -> Option<serde_json::Value> {
    let token = token?;
    match get_json(&format!("{base}/api/auth/userdetails"), Some(token)).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::warn!("Failed to fetch profile: {e}");
            None
        }
    }
}

pub async fn update_profile(
    base: &str,
    token: &str,
    data: &serde_json::Value,
) -> Result<serde_json::Value, String> {
    post_json(&format!("{base}/api/auth/userdetails"), data, Some(token)).await
}

// ---------------------------------------------------------------------------
// Subscriptions & payments
// ---------------------------------------------------------------------------

pub async fn fetch_current_subscription(
    base: &str,
    token: &str,
) -> Result<SubscriptionStatus, String> {
    get_json(&format!("{base}/api/subscriptions/current"), Some(token)).await
}

pub async fn fetch_pending_invoices(
    base: &str,
    token: &str,
) -> Result<Vec<PendingInvoice>, String> {
    get_json(
        &format!("{base}/api/subscriptions/invoices/pending"),
        Some(token),
    )
    .await
}

pub async fn apply_for_plan(base: &str, token: &str, plan: &str) -> Result<ApplyResponse, String> {
    post_empty(
        &format!("{base}/api/subscriptions/apply?plan={plan}"),
        Some(token),
    )
    .await
}

pub async fn pay_invoice(
    base: &str,
    token: &str,
    payment: &PaymentRequest,
) -> Result<PaymentResponse, String> {
    post_json(&format!("{base}/api/subscriptions/pay"), payment, Some(token)).await
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

pub async fn fetch_equipment(base: &str, token: &str) -> Result<Vec<Equipment>, String> {
    get_json(&format!("{base}/api/equipment"), Some(token)).await
}

pub async fn add_equipment(
    base: &str,
    token: &str,
    item: &NewEquipmentRequest,
) -> Result<(), String> {
    let _: serde_json::Value =
        post_json(&format!("{base}/api/equipment"), item, Some(token)).await?;
    Ok(())
}

pub async fn update_equipment_status(
    base: &str,
    token: &str,
    id: i64,
    status: &str,
) -> Result<(), String> {
    patch(
        &format!("{base}/api/equipment/{id}/status?status={status}"),
        Some(token),
    )
    .await
}

pub async fn delete_equipment(base: &str, token: &str, id: i64) -> Result<(), String> {
    delete(&format!("{base}/api/equipment/{id}"), Some(token)).await
}

// ---------------------------------------------------------------------------
// Facilities
// ---------------------------------------------------------------------------

pub async fn fetch_facilities(base: &str, token: &str) -> Result<Vec<FacilityRoom>, String> {
    get_json(&format!("{base}/api/facilities"), Some(token)).await
}

pub async fn add_facility(base: &str, token: &str, room: &NewRoomRequest) -> Result<(), String> {
    let _: serde_json::Value =
        post_json(&format!("{base}/api/facilities"), room, Some(token)).await?;
    Ok(())
}

pub async fn delete_facility(base: &str, token: &str, id: i64) -> Result<(), String> {
    delete(&format!("{base}/api/facilities/{id}"), Some(token)).await
}

// ---------------------------------------------------------------------------
// Classes, reports, admin
// ---------------------------------------------------------------------------

pub async fn schedule_class(
    base: &str,
    token: &str,
    class: &ScheduleClassRequest,
) -> Result<(), String> {
    let _: serde_json::Value =
        post_json(&format!("{base}/api/classes/schedule"), class, Some(token)).await?;
    Ok(())
}

pub async fn fetch_pending_trainers(
    base: &str,
    token: &str,
) -> Result<Vec<PendingTrainer>, String> {
    get_json(&format!("{base}/api/admin/pending-trainers"), Some(token)).await
}

/// Approve or reject a trainer application
pub async fn review_trainer(
    base: &str,
    token: &str,
    trainer_id: &str,
    approve: bool,
) -> Result<(), String> {
    let action = if approve { "approve" } else { "reject" };
    let _: serde_json::Value = post_empty(
        &format!("{base}/api/admin/pending-trainers/{action}/{trainer_id}"),
        Some(token),
    )
    .await?;
    Ok(())
}

pub async fn fetch_admin_stats(base: &str, token: &str) -> Result<AdminStats, String> {
    get_json(&format!("{base}/api/dashboard/admin-stats"), Some(token)).await
}

pub async fn fetch_churn_risk(base: &str, token: &str) -> Result<Vec<ChurnRiskMember>, String> {
    get_json(&format!("{base}/api/reports/churn-risk"), Some(token)).await
}

pub async fn fetch_trainer_performance(
    base: &str,
    token: &str,
) -> Result<Vec<TrainerPerformance>, String> {
    get_json(&format!("{base}/api/reports/trainer-performance"), Some(token)).await
}

#[cfg(test)]
mod tests {
    use super::error_message;

    #[test]
    fn json_message_field_wins() {
        assert_eq!(
            error_message(401, r#"{"message":"Invalid credentials"}"#),
            "Invalid credentials"
        );
    }

    #[test]
    fn json_error_field_is_second_choice() {
        assert_eq!(
            error_message(400, r#"{"error":"Email already registered"}"#),
            "Email already registered"
        );
        // message outranks error when both are present
        assert_eq!(
            error_message(400, r#"{"error":"b","message":"a"}"#),
            "a"
        );
    }

    #[test]
    fn bare_json_string_body_is_used() {
        assert_eq!(error_message(403, r#""Forbidden plan""#), "Forbidden plan");
    }

    #[test]
    fn plain_text_body_is_used_verbatim() {
        assert_eq!(
            error_message(500, "current subscription status is still pending"),
            "current subscription status is still pending"
        );
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        assert_eq!(error_message(503, ""), "Request failed with status 503");
        assert_eq!(error_message(503, "  \n"), "Request failed with status 503");
    }

    #[test]
    fn non_string_fields_fall_through_to_raw_body() {
        assert_eq!(error_message(400, r#"{"message":42}"#), r#"{"message":42}"#);
    }
}
