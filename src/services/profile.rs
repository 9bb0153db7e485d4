// src/services/profile.rs
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    config::{RelayConfig, SupabaseConfig},
    error::AppError,
    message::UserProfileUpdate,
    services::upstream::send_json,
};

const USER_TABLE: &str = "user";

/// Update-if-exists, else insert.
///
/// The PATCH is filtered on `user_id`; an empty representation means no row
/// matched and the full record is inserted instead. A failed PATCH is
/// reported as-is without trying the insert. A request that carries no
/// fields besides `user_id` only looks the row up, since an empty PATCH
/// matches nothing and would wrongly trigger the insert.
pub async fn upsert_profile(
    http: &Client,
    config: &RelayConfig,
    update: &UserProfileUpdate,
) -> Result<Value, AppError> {
    let store = config.supabase.as_ref().ok_or(AppError::MissingConfig)?;
    update.validate()?;

    tokio::time::timeout(config.profile_timeout, upsert(http, store, update))
        .await
        .map_err(|_| AppError::Timeout)?
}

async fn upsert(
    http: &Client,
    store: &SupabaseConfig,
    update: &UserProfileUpdate,
) -> Result<Value, AppError> {
    let changes = update.changes();
    let filter = [("user_id", format!("eq.{}", update.user_id))];

    let existing = if changes.is_empty() {
        info!(user_id = %update.user_id, "No profile fields given, looking up user");
        let lookup = authorized(http.get(store.table_url(USER_TABLE)), store)
            .query(&filter)
            .query(&[("select", "*")]);
        first_row(send_json(lookup).await?)
    } else {
        info!(user_id = %update.user_id, ?changes, "Updating user profile");
        let patch = authorized(http.patch(store.table_url(USER_TABLE)), store)
            .query(&filter)
            .json(&changes);
        first_row(send_json(patch).await?)
    };

    if let Some(row) = existing {
        info!(user_id = %update.user_id, "Profile up to date");
        return Ok(row);
    }

    warn!(user_id = %update.user_id, "No profile matched, inserting a new one");

    let record = update.record();
    let insert = authorized(http.post(store.table_url(USER_TABLE)), store).json(&record);
    let created = first_row(send_json(insert).await?);

    info!(user_id = %update.user_id, "Created user profile");
    match created {
        Some(row) => Ok(row),
        None => Ok(serde_json::to_value(&record)?),
    }
}

fn authorized(request: RequestBuilder, store: &SupabaseConfig) -> RequestBuilder {
    request
        .header("apikey", &store.service_key)
        .bearer_auth(&store.service_key)
        .header("Prefer", "return=representation")
}

/// PostgREST returns affected rows as an array; a bare object is accepted too.
fn first_row(value: Value) -> Option<Value> {
    match value {
        Value::Array(rows) => rows.into_iter().next(),
        Value::Object(_) => Some(value),
        _ => None,
    }
}
