//! REST-backed implementation of the per-user pinned record store.

use portal_host::{
    join_ordered_ids, parse_ordered_ids, AppId, UserAppRecord, UserAppsStore, UserAppsStoreFuture,
    UserIdentity, WidgetConfig,
};
use serde_json::{json, Value};

use crate::rest;

#[derive(Debug, Clone, Copy, Default)]
/// Record store reading and writing the configured user-apps list.
///
/// One list item per user: the user id plus a single text field holding
/// the `;`-joined ordered app ids.
pub struct RestUserAppsStore;

impl RestUserAppsStore {
    fn list_url() -> String {
        let config = WidgetConfig::get();
        format!(
            "{}/_api/web/lists/getbytitle('{}')",
            config.site_relative_url(),
            config.user_apps_list
        )
    }

    fn query_url(user: &UserIdentity, select: &str) -> String {
        let filter = format!("UserId eq '{}'", user.user_id);
        format!(
            "{}/items?$select={select}&$filter={}&$top=1",
            Self::list_url(),
            rest::encode_query(&filter)
        )
    }

    fn parse_record(payload: &Value, user_id: &str) -> Option<UserAppRecord> {
        let row = payload.get("value")?.as_array()?.first()?;
        let raw = row.get("UserApps").and_then(Value::as_str).unwrap_or("");
        Some(UserAppRecord {
            user_id: user_id.to_string(),
            ordered_ids: parse_ordered_ids(raw),
        })
    }

    fn parse_item_id(payload: &Value) -> Option<i64> {
        payload
            .get("value")?
            .as_array()?
            .first()?
            .get("Id")
            .and_then(Value::as_i64)
    }
}

impl UserAppsStore for RestUserAppsStore {
    fn load_record<'a>(
        &'a self,
        user: &'a UserIdentity,
    ) -> UserAppsStoreFuture<'a, Result<Option<UserAppRecord>, String>> {
        Box::pin(async move {
            let url = Self::query_url(user, "UserApps");
            let payload = rest::get_json(&url).await.map_err(|err| err.to_string())?;
            Ok(Self::parse_record(&payload, &user.user_id))
        })
    }

    fn save_record<'a>(
        &'a self,
        user: &'a UserIdentity,
        ordered_ids: &'a [AppId],
    ) -> UserAppsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let joined = join_ordered_ids(ordered_ids);
            let lookup = Self::query_url(user, "Id");
            let payload = rest::get_json(&lookup)
                .await
                .map_err(|err| err.to_string())?;

            match Self::parse_item_id(&payload) {
                Some(item_id) => {
                    let url = format!("{}/items({item_id})", Self::list_url());
                    rest::merge_json(&url, &json!({ "UserApps": joined }))
                        .await
                        .map_err(|err| err.to_string())
                }
                None => {
                    let url = format!("{}/items", Self::list_url());
                    rest::post_json(
                        &url,
                        &json!({ "UserId": user.user_id, "UserApps": joined }),
                    )
                    .await
                    .map_err(|err| err.to_string())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_a_present_record() {
        let payload = json!({ "value": [ { "UserApps": "1;2;3" } ] });
        let record = RestUserAppsStore::parse_record(&payload, "17").expect("record");
        assert_eq!(record.user_id, "17");
        assert_eq!(
            record.ordered_ids,
            vec![AppId::from("1"), AppId::from("2"), AppId::from("3")]
        );
    }

    #[test]
    fn empty_result_set_means_no_record() {
        let payload = json!({ "value": [] });
        assert_eq!(RestUserAppsStore::parse_record(&payload, "17"), None);
    }

    #[test]
    fn empty_field_parses_to_an_empty_order() {
        let payload = json!({ "value": [ { "UserApps": "" } ] });
        let record = RestUserAppsStore::parse_record(&payload, "17").expect("record");
        assert_eq!(record.ordered_ids, Vec::<AppId>::new());
    }

    #[test]
    fn item_id_is_read_from_the_first_row() {
        let payload = json!({ "value": [ { "Id": 42 } ] });
        assert_eq!(RestUserAppsStore::parse_item_id(&payload), Some(42));
        assert_eq!(RestUserAppsStore::parse_item_id(&json!({ "value": [] })), None);
    }
}
