//! WebDriver message types
//!
//! These types represent the W3C WebDriver session payloads as served by
//! Appium. Vendor capabilities carry the `appium:` prefix; `platformName`
//! is W3C-standard and stays unprefixed.
//! See: https://www.w3.org/TR/webdriver/#new-session

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::config::TargetConfig;

// === Capabilities ===

/// Capability record describing the automation target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(rename = "platformName")]
    pub platform_name: String,

    #[serde(rename = "appium:platformVersion")]
    pub platform_version: String,

    #[serde(rename = "appium:deviceName")]
    pub device_name: String,

    #[serde(rename = "appium:automationName")]
    pub automation_name: String,

    /// Absolute path of the app bundle on the server's machine
    #[serde(rename = "appium:app")]
    pub app: String,
}

impl Capabilities {
    /// Build the capability record for a configured target and resolved
    /// app bundle path
    pub fn for_target(target: &TargetConfig, app: &Path) -> Self {
        Self {
            platform_name: target.platform_name.clone(),
            platform_version: target.platform_version.clone(),
            device_name: target.device_name.clone(),
            automation_name: target.automation_name.clone(),
            app: app.to_string_lossy().into_owned(),
        }
    }
}

// === Requests ===

/// New-session request body
#[derive(Debug, Clone, Serialize)]
pub struct NewSessionRequest {
    pub capabilities: CapabilityNegotiation,
}

/// W3C capability negotiation wrapper
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityNegotiation {
    pub always_match: Capabilities,
    pub first_match: Vec<Value>,
}

impl NewSessionRequest {
    /// Wrap a capability record the way the remote end negotiates it:
    /// everything required in `alwaysMatch`, one empty `firstMatch` arm
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities: CapabilityNegotiation {
                always_match: capabilities,
                first_match: vec![Value::Object(Default::default())],
            },
        }
    }
}

// === Responses ===

/// Response envelope; every WebDriver reply nests its payload in `value`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireResponse<T> {
    pub value: T,
}

/// Successful new-session payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionValue {
    pub session_id: String,

    /// Capabilities the server actually granted
    #[serde(default)]
    pub capabilities: Value,
}

/// Error payload nested in the `value` field of failed replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireError {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacktrace: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capabilities_carry_vendor_prefixes() {
        let target = TargetConfig::default();
        let caps = Capabilities::for_target(&target, Path::new("/opt/apps/TheApp.app.zip"));
        let value = serde_json::to_value(&caps).unwrap();

        assert_eq!(
            value,
            json!({
                "platformName": "iOS",
                "appium:platformVersion": "16.2",
                "appium:deviceName": "iPhone 14 Pro",
                "appium:automationName": "XCUITest",
                "appium:app": "/opt/apps/TheApp.app.zip",
            })
        );
    }

    #[test]
    fn test_new_session_request_shape() {
        let target = TargetConfig::default();
        let caps = Capabilities::for_target(&target, Path::new("/opt/apps/TheApp.app.zip"));
        let value = serde_json::to_value(NewSessionRequest::new(caps)).unwrap();

        assert!(value["capabilities"]["alwaysMatch"]["platformName"].is_string());
        assert_eq!(value["capabilities"]["firstMatch"], json!([{}]));
    }

    #[test]
    fn test_new_session_value_decodes() {
        let body = json!({
            "value": {
                "sessionId": "8a9c3b6e",
                "capabilities": {"platformName": "iOS"},
            }
        });
        let envelope: WireResponse<NewSessionValue> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.value.session_id, "8a9c3b6e");
    }

    #[test]
    fn test_wire_error_decodes_without_stacktrace() {
        let body = json!({
            "value": {
                "error": "session not created",
                "message": "ECONNREFUSED",
            }
        });
        let envelope: WireResponse<WireError> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.value.error, "session not created");
        assert_eq!(envelope.value.message, "ECONNREFUSED");
        assert!(envelope.value.stacktrace.is_none());
    }
}
