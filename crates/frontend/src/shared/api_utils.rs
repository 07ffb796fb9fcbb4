//! HTTP seam between the console and the banking API.
//!
//! All request functions return display-ready `Result<_, String>`; mutation
//! helpers run error bodies through the `details` -> `message` -> default
//! fallback chain before handing the text to the message bus.

use contracts::shared::api_error::extraer_mensaje;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Build the API base URL from the current window location. The banking
/// backend listens on port 5000 and mounts everything under `/api`.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000/api", protocol, hostname)
}

/// Full URL for an API path (the path starts with "/", e.g. "/clientes").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Low-level fetch: returns the response status and body text, or a
/// transport-level error description.
async fn solicitar(
    metodo: &str,
    path: &str,
    body: Option<String>,
) -> Result<(u16, String), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method(metodo);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(body));
    }

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{e:?}"))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().unwrap_or_default();
    Ok((resp.status(), text))
}

/// GET a JSON payload. Failures surface as a bare transport error
/// ("HTTP 500"), which list screens prefix with their own load text.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let (status, text) = solicitar("GET", path, None).await?;
    if !(200..300).contains(&status) {
        return Err(format!("HTTP {}", status));
    }
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// GET a JSON payload, extracting the server's error body on failure.
pub async fn get_json_con_detalle<T: DeserializeOwned>(
    path: &str,
    por_defecto: &str,
) -> Result<T, String> {
    let (status, text) = solicitar("GET", path, None)
        .await
        .map_err(|_| por_defecto.to_string())?;
    if !(200..300).contains(&status) {
        return Err(extraer_mensaje(&text, por_defecto));
    }
    serde_json::from_str(&text).map_err(|_| por_defecto.to_string())
}

/// POST or PUT a JSON body, extracting the server's error body on failure.
pub async fn send_json<B: Serialize>(
    metodo: &str,
    path: &str,
    body: &B,
    por_defecto: &str,
) -> Result<(), String> {
    let body = serde_json::to_string(body).map_err(|e| format!("{e}"))?;
    let (status, text) = solicitar(metodo, path, Some(body))
        .await
        .map_err(|_| por_defecto.to_string())?;
    if !(200..300).contains(&status) {
        return Err(extraer_mensaje(&text, por_defecto));
    }
    Ok(())
}

/// DELETE, extracting the server's error body on failure.
pub async fn delete(path: &str, por_defecto: &str) -> Result<(), String> {
    let (status, text) = solicitar("DELETE", path, None)
        .await
        .map_err(|_| por_defecto.to_string())?;
    if !(200..300).contains(&status) {
        return Err(extraer_mensaje(&text, por_defecto));
    }
    Ok(())
}
