//! Page-level facts resolved from the hosting document.

use portal_host::{PageLanguage, UserIdentity};
use wasm_bindgen::JsValue;

/// Active UI culture, taken from the host page's `<html lang>` attribute.
pub fn resolve_page_language() -> PageLanguage {
    let declared = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .and_then(|root| root.get_attribute("lang"))
        .filter(|tag| !tag.is_empty());

    match declared {
        Some(tag) => PageLanguage::new(tag),
        None => PageLanguage::fallback(),
    }
}

/// Current user identity from the host page's global context object.
///
/// Returns `None` when the host did not publish one; the dock then runs
/// without pin persistence rather than failing the page.
pub fn resolve_user_identity() -> Option<UserIdentity> {
    let context = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("_spPageContextInfo"))
        .ok()?;
    if context.is_undefined() || context.is_null() {
        return None;
    }

    let user_id = read_string_or_number(&context, "userId")?;
    let login_name = js_sys::Reflect::get(&context, &JsValue::from_str("userLoginName"))
        .ok()
        .and_then(|value| value.as_string())?;

    Some(UserIdentity {
        user_id,
        login_name,
    })
}

fn read_string_or_number(target: &JsValue, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(target, &JsValue::from_str(key)).ok()?;
    value
        .as_string()
        .or_else(|| value.as_f64().map(|number| (number as i64).to_string()))
}
