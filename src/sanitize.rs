use serde_json::Value;

use crate::errors::{FetchError, Result};

// Keys holding credentials; dropped outright.
const SECRET_KEYS: [&str; 2] = ["private_token", "runners_token"];

// Keys holding sign-in addresses; blanked rather than removed.
const SIGN_IN_IP_KEYS: [&str; 2] = ["current_sign_in_ip", "last_sign_in_ip"];

const BLANK_IP: &str = "0.0.0.0";

/// Reduce a list payload to its first element, then redact sensitive
/// top-level fields. An empty list is an error.
pub fn sanitize(payload: Value) -> Result<Value> {
    let mut value = match payload {
        Value::Array(items) => items.into_iter().next().ok_or(FetchError::EmptyList)?,
        other => other,
    };

    if let Value::Object(ref mut fields) = value {
        for key in SECRET_KEYS {
            fields.remove(key);
        }

        if let Some(identities) = fields.get_mut("identities") {
            if identities.is_array() {
                *identities = Value::Array(Vec::new());
            }
        }

        for key in SIGN_IN_IP_KEYS {
            if let Some(address) = fields.get_mut(key) {
                if address.is_string() {
                    *address = Value::String(BLANK_IP.to_string());
                }
            }
        }
    }

    Ok(value)
}
