use gloo_net::http::Request;

use super::*;

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

pub fn open_in_new_browsing_context(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(format!("popup blocked for `{url}`")),
        Err(err) => Err(format!("window.open failed: {err:?}")),
    }
}

pub fn local_storage_get(key: &str) -> Result<Option<String>, String> {
    local_storage()?
        .get_item(key)
        .map_err(|e| format!("localStorage get_item failed: {e:?}"))
}

pub fn local_storage_set(key: &str, value: &str) -> Result<(), String> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| format!("localStorage set_item failed: {e:?}"))
}

pub async fn post_json(url: &str, body: &Value) -> Result<HttpResponse, String> {
    let request = Request::post(url)
        .header("content-type", "application/json")
        .json(body)
        .map_err(|e| format!("failed to build request: {e}"))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("failed to read response body: {e}"))?;
    Ok(HttpResponse { status, body })
}
