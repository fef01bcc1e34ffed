//! Browser bindings. The JS side owns rendering, themes-as-CSS, widgets and
//! persistence; this facade just moves lines and events across the boundary.

use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::context::TerminalContext;
use crate::data::Portfolio;
use crate::events::{EventSink, TerminalEvent};

/// Matches the original UI, which showed a short "Processing..." flicker
/// between submit and output.
const PROCESSING_DELAY_MS: u32 = 100;

// better errors in browser console
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Response wrapper for js comms: the full output buffer plus the bits of
/// session state the page chrome displays.
#[derive(Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    pub output: Vec<String>,
    pub current_path: String,
    pub theme: String,
}

/// Forwards every terminal event to a JS callback as `(kind, payload)`.
struct JsEventSink {
    callback: js_sys::Function,
}

impl EventSink for JsEventSink {
    fn on_event(&mut self, event: &TerminalEvent) {
        let payload = serde_wasm_bindgen::to_value(event).unwrap_or(JsValue::NULL);
        if let Err(err) = self.callback.call1(&JsValue::NULL, &payload) {
            web_sys::console::warn_2(&"[termfolio] event callback failed:".into(), &err);
        }
    }
}

#[wasm_bindgen(js_name = Terminal)]
pub struct TerminalHandle {
    inner: crate::Terminal,
}

#[wasm_bindgen(js_class = Terminal)]
impl TerminalHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TerminalHandle {
        let mut inner = crate::Terminal::new();
        inner.greet();
        TerminalHandle { inner }
    }

    /// Replace the dataset with host-supplied JSON. The session restarts
    /// with a fresh filesystem built from it.
    pub fn load_portfolio(&mut self, json: &str) -> JsValue {
        match Portfolio::from_json(json) {
            Ok(portfolio) => {
                self.inner = crate::Terminal::with_context(TerminalContext::with_portfolio(portfolio));
                self.inner.greet();
                serde_wasm_bindgen::to_value(&serde_json::json!({ "success": true }))
                    .unwrap_or(JsValue::NULL)
            }
            Err(err) => {
                web_sys::console::error_2(
                    &"[termfolio] invalid portfolio json:".into(),
                    &err.to_string().into(),
                );
                serde_wasm_bindgen::to_value(&serde_json::json!({
                    "success": false,
                    "error": err.to_string(),
                }))
                .unwrap_or(JsValue::NULL)
            }
        }
    }

    /// Events (command executed, theme changed, widget toggled, ...) are
    /// delivered to `callback` as plain objects, fire-and-forget.
    pub fn set_event_callback(&mut self, callback: js_sys::Function) {
        self.inner.register_sink(Box::new(JsEventSink { callback }));
    }

    /// Run one input line after the synthetic processing delay and return
    /// the refreshed session snapshot.
    pub async fn execute(&mut self, input: String) -> JsValue {
        TimeoutFuture::new(PROCESSING_DELAY_MS).await;
        self.inner.execute(&input);
        self.snapshot()
    }

    pub fn complete(&mut self, input: &str) -> String {
        self.inner.complete(input)
    }

    pub fn recall_last(&self) -> Option<String> {
        self.inner.recall_last().map(str::to_string)
    }

    pub fn current_path(&self) -> String {
        self.inner.current_path().to_string()
    }

    pub fn theme(&self) -> String {
        self.inner.context().theme.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    pub fn snapshot(&self) -> JsValue {
        let response = CommandResponse {
            success: true,
            output: self.inner.output().to_vec(),
            current_path: self.inner.current_path().to_string(),
            theme: self.inner.context().theme.clone(),
        };
        serde_wasm_bindgen::to_value(&response).unwrap_or(JsValue::NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    async fn execute_round_trip() {
        let mut handle = TerminalHandle::new();
        handle.execute("pwd".to_string()).await;
        assert_eq!(handle.current_path(), "/home/portfolio");
        assert!(!handle.is_loading());
    }

    #[wasm_bindgen_test]
    fn completion_is_exposed() {
        let mut handle = TerminalHandle::new();
        assert_eq!(handle.complete("pro"), "projects ");
    }
}
