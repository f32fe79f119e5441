use super::*;

fn unsupported(api: &str) -> String {
    format!("{api} is only available when compiled for wasm32")
}

pub fn open_in_new_browsing_context(_url: &str) -> Result<(), String> {
    Err(unsupported("window.open"))
}

pub fn local_storage_get(_key: &str) -> Result<Option<String>, String> {
    Ok(None)
}

pub fn local_storage_set(_key: &str, _value: &str) -> Result<(), String> {
    Ok(())
}

pub async fn post_json(_url: &str, _body: &Value) -> Result<HttpResponse, String> {
    Err(unsupported("fetch"))
}
