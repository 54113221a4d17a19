use wasm_bindgen::prelude::*;
use serde::Deserialize;
use serde_json::json;
use crate::generator::WaveGenerator;

#[wasm_bindgen]
impl WaveGenerator {
    /// JSON command entry point for shells that prefer one message channel.
    ///
    /// `{"action": "...", "params": {...}}` in, `{"success": true, ...}` or
    /// `{"error": "..."}` out.
    pub fn execute_command(&mut self, cmd_json: &str) -> String {
        #[derive(Deserialize)]
        struct Command {
            action: String,
            #[serde(default)]
            params: serde_json::Value,
        }

        let cmd: Command = match serde_json::from_str(cmd_json) {
            Ok(c) => c,
            Err(e) => return json!({ "error": format!("Invalid JSON: {}", e) }).to_string(),
        };

        let outcome = match cmd.action.as_str() {
            "set_field" => {
                let field = cmd.params["field"].as_str().unwrap_or("");
                let value = match &cmd.params["value"] {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                self.set_field(field, &value)
            }
            "set_color" => self.set_color(cmd.params["color"].as_str().unwrap_or("")),
            "update" => self.update(&cmd.params.to_string()),
            "set_strict" => {
                self.set_strict(cmd.params["strict"].as_bool().unwrap_or(false));
                Ok(())
            }
            "reset" => {
                self.reset();
                Ok(())
            }
            "get_config" => return self.config_json(),
            "get_result" => return self.result_json(),
            "get_css" => return json!({ "css": self.css_text() }).to_string(),
            "export_svg" => return json!({ "svg": self.export_svg() }).to_string(),
            other => return json!({ "error": format!("Unknown action: {}", other) }).to_string(),
        };

        match outcome {
            Ok(()) => json!({ "success": true, "polygon": self.polygon() }).to_string(),
            Err(e) => json!({ "error": e.to_string() }).to_string(),
        }
    }
}
