use user_cards_lib::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, Response};

const MOUNT_ID: &str = "app";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn error(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

macro_rules! console_error {
    ($($t:tt)*) => (error(&format_args!($($t)*).to_string()))
}

#[wasm_bindgen]
pub fn render_users_json(json_input: &str) -> String {
    let config = DirectoryConfig::default();
    let state = match parse_users(json_input) {
        Ok(users) => ViewState::Loaded(users),
        Err(e) => ViewState::Error(e.to_string()),
    };
    render_view(&state, &config)
}

#[wasm_bindgen]
pub fn validate_users_json(json_input: &str) -> bool {
    parse_users(json_input).is_ok()
}

fn mount_point() -> Result<Element, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    if let Some(element) = document.get_element_by_id(MOUNT_ID) {
        return Ok(element);
    }
    document
        .body()
        .map(Element::from)
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

fn js_detail(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(value: JsValue) -> UserCardsError {
    UserCardsError::Network(js_detail(&value))
}

async fn fetch_users(endpoint: &str) -> Result<Vec<User>, UserCardsError> {
    let window = web_sys::window()
        .ok_or_else(|| UserCardsError::Network("no window available".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(endpoint))
        .await
        .map_err(network_error)?
        .dyn_into()
        .map_err(network_error)?;

    check_status(response.status())?;

    let text = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| UserCardsError::Network("response body was not text".to_string()))?;

    parse_users(&body)
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_log!("user-cards WASM module loaded");

    let mount = mount_point()?;
    let mut directory = UserDirectory::new(DirectoryConfig::default());
    mount.set_inner_html(&directory.render());

    let Some(endpoint) = directory.start() else {
        return Ok(());
    };

    spawn_local(async move {
        let result = fetch_users(&endpoint).await;
        if let Err(e) = &result {
            console_error!("Error fetching users: {} ({})", e, e.detail());
        }
        directory.finish(result);
        mount.set_inner_html(&directory.render());
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS_JSON: &str = include_str!("../../testdata/users.json");

    #[test]
    fn test_render_users_json_renders_cards() {
        let html = render_users_json(USERS_JSON);
        assert_eq!(html.matches("class=\"user-card\"").count(), 3);
    }

    #[test]
    fn test_render_users_json_reports_bad_input() {
        let html = render_users_json("{not json");
        assert!(html.contains("role=\"alert\""));
        assert!(!validate_users_json("{not json"));
        assert!(validate_users_json(USERS_JSON));
    }
}
