// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

impl ChatRequest {
    pub fn conversation_id(&self) -> &str {
        self.conversation_id.as_deref().unwrap_or("")
    }

    /// Caller identity forwarded upstream; empty or missing means anonymous.
    pub fn user(&self) -> &str {
        match self.user.as_deref() {
            Some(u) if !u.is_empty() => u,
            _ => "anonymous",
        }
    }
}

/// Body sent to the AI chat provider.
#[derive(Debug, Serialize)]
pub struct ChatPayload<'a> {
    pub inputs: serde_json::Map<String, Value>,
    pub query: &'a str,
    pub response_mode: &'static str,
    pub conversation_id: &'a str,
    pub user: &'a str,
}

impl<'a> From<&'a ChatRequest> for ChatPayload<'a> {
    fn from(req: &'a ChatRequest) -> Self {
        Self {
            inputs: serde_json::Map::new(),
            query: &req.query,
            response_mode: "blocking",
            conversation_id: req.conversation_id(),
            user: req.user(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    #[default]
    Registered,
    Activist,
    Admin,
    Superadmin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfileUpdate {
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_mun: Option<String>,
    #[serde(default)]
    pub user_role: Option<UserRole>,
    #[serde(default)]
    pub user_premium: Option<bool>,
}

/// Partial update: only the fields the caller actually sent.
#[derive(Debug, Serialize)]
pub struct ProfileChanges<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_mun: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_premium: Option<bool>,
}

impl ProfileChanges<'_> {
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none()
            && self.user_email.is_none()
            && self.user_mun.is_none()
            && self.user_role.is_none()
            && self.user_premium.is_none()
    }
}

/// Full row written when no existing profile matched.
#[derive(Debug, Serialize)]
pub struct ProfileRecord<'a> {
    pub user_id: &'a str,
    pub user_name: Option<&'a str>,
    pub user_email: Option<&'a str>,
    pub user_mun: Option<&'a str>,
    pub user_role: UserRole,
    pub user_premium: bool,
}

impl UserProfileUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::BadRequest("user_id cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn changes(&self) -> ProfileChanges<'_> {
        ProfileChanges {
            user_name: self.user_name.as_deref(),
            user_email: self.user_email.as_deref(),
            user_mun: self.user_mun.as_deref(),
            user_role: self.user_role,
            user_premium: self.user_premium,
        }
    }

    pub fn record(&self) -> ProfileRecord<'_> {
        ProfileRecord {
            user_id: &self.user_id,
            user_name: self.user_name.as_deref(),
            user_email: self.user_email.as_deref(),
            user_mun: self.user_mun.as_deref(),
            user_role: self.user_role.unwrap_or_default(),
            user_premium: self.user_premium.unwrap_or(false),
        }
    }
}

/// In-band failure envelope for the pass-through endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<AppError> for ErrorBody {
    fn from(err: AppError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProfileResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(err: AppError) -> Self {
        Self::failed_with(err.to_string())
    }

    pub fn failed_with(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_defaults_apply_when_fields_absent() {
        let req: ChatRequest = serde_json::from_value(json!({ "query": "hello" })).unwrap();
        let payload = serde_json::to_value(ChatPayload::from(&req)).unwrap();
        assert_eq!(
            payload,
            json!({
                "inputs": {},
                "query": "hello",
                "response_mode": "blocking",
                "conversation_id": "",
                "user": "anonymous"
            })
        );
    }

    #[test]
    fn chat_null_and_empty_user_become_anonymous() {
        let req: ChatRequest = serde_json::from_value(json!({
            "query": "hi",
            "user": null,
            "conversation_id": null
        }))
        .unwrap();
        assert_eq!(req.user(), "anonymous");
        assert_eq!(req.conversation_id(), "");

        let req: ChatRequest =
            serde_json::from_value(json!({ "query": "hi", "user": "" })).unwrap();
        assert_eq!(req.user(), "anonymous");
    }

    #[test]
    fn changes_only_carry_provided_fields() {
        let update: UserProfileUpdate = serde_json::from_value(json!({
            "user_id": "u-1",
            "user_name": "Anna"
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(update.changes()).unwrap(),
            json!({ "user_name": "Anna" })
        );
    }

    #[test]
    fn changes_without_fields_are_empty() {
        let update: UserProfileUpdate =
            serde_json::from_value(json!({ "user_id": "u-1" })).unwrap();
        assert!(update.changes().is_empty());
        assert_eq!(serde_json::to_value(update.changes()).unwrap(), json!({}));

        let update: UserProfileUpdate =
            serde_json::from_value(json!({ "user_id": "u-1", "user_premium": false })).unwrap();
        assert!(!update.changes().is_empty());
    }

    #[test]
    fn record_substitutes_role_and_premium_defaults() {
        let update: UserProfileUpdate = serde_json::from_value(json!({
            "user_id": "u-1",
            "user_email": "anna@example.com"
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(update.record()).unwrap(),
            json!({
                "user_id": "u-1",
                "user_name": null,
                "user_email": "anna@example.com",
                "user_mun": null,
                "user_role": "registered",
                "user_premium": false
            })
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed = serde_json::from_value::<UserProfileUpdate>(json!({
            "user_id": "u-1",
            "user_role": "overlord"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn blank_user_id_fails_validation() {
        let update: UserProfileUpdate =
            serde_json::from_value(json!({ "user_id": "  " })).unwrap();
        assert_eq!(
            update.validate().unwrap_err().to_string(),
            "user_id cannot be empty"
        );
    }

    #[test]
    fn profile_response_shapes() {
        let ok = serde_json::to_value(ProfileResponse::ok(json!({ "user_id": "u-1" }))).unwrap();
        assert_eq!(ok, json!({ "success": true, "data": { "user_id": "u-1" } }));

        let failed =
            serde_json::to_value(ProfileResponse::failed(AppError::MissingConfig)).unwrap();
        assert_eq!(
            failed,
            json!({ "success": false, "error": "Server configuration error" })
        );
    }
}
