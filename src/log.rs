use serde_json::Value;

#[cfg(target_arch = "wasm32")]
fn send(level: &str, message: &str, context: Value) {
    use serde::Serialize;
    use wasm_bindgen::JsValue;

    // json_compatible so objects show up as plain objects rather than Maps
    let ctx = context
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL);
    let msg = JsValue::from_str(message);
    match level {
        "error" => web_sys::console::error_2(&msg, &ctx),
        "warn" => web_sys::console::warn_2(&msg, &ctx),
        "debug" => web_sys::console::debug_2(&msg, &ctx),
        _ => web_sys::console::info_2(&msg, &ctx),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn send(level: &str, message: &str, context: Value) {
    eprintln!("[{level}] {message} {context}");
}

pub fn info(message: &str, context: Value)  { send("info",  message, context); }
pub fn warn(message: &str, context: Value)  { send("warn",  message, context); }
pub fn error(message: &str, context: Value) { send("error", message, context); }
pub fn debug(message: &str, context: Value) { send("debug", message, context); }
