use serde::{Deserialize, Serialize};

pub const FALLBACK_OPENING_HOURS: &str = "Mon-Fri: 9AM-5PM";
pub const FALLBACK_PHONE: &str = "+1 (555) 123-4567";
pub const FALLBACK_WIFI: &str = "Available";

/// Business details the extraction service is asked to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub wifi: Option<String>,
}

impl BusinessRecord {
    /// JSON Schema sent along with the extraction prompt. Only `name` is required.
    pub fn json_schema() -> serde_json::Value {
        let optional_string = serde_json::json!({
            "anyOf": [{ "type": "string" }, { "type": "null" }],
            "default": null
        });

        serde_json::json!({
            "title": "ExtractSchema",
            "type": "object",
            "properties": {
                "name": { "title": "Name", "type": "string" },
                "opening_hours": with_title(&optional_string, "Opening Hours"),
                "phone": with_title(&optional_string, "Phone"),
                "email": with_title(&optional_string, "Email"),
                "wifi": with_title(&optional_string, "Wifi"),
            },
            "required": ["name"]
        })
    }

    /// Placeholder record derived from the website string alone.
    pub fn fallback(website: &str) -> Self {
        let stem = website.split('.').next().unwrap_or(website);

        Self {
            name: title_case(stem),
            opening_hours: Some(FALLBACK_OPENING_HOURS.to_string()),
            phone: Some(FALLBACK_PHONE.to_string()),
            email: Some(format!("contact@{}", website)),
            wifi: Some(FALLBACK_WIFI.to_string()),
        }
    }
}

fn with_title(base: &serde_json::Value, title: &str) -> serde_json::Value {
    let mut value = base.clone();
    if let serde_json::Value::Object(map) = &mut value {
        map.insert("title".to_string(), serde_json::Value::String(title.to_string()));
    }
    value
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest,
/// so `my-cafe` becomes `My-Cafe` and `https://shop` becomes `Https://Shop`.
///
/// A leading letter whose upper-case form is several characters keeps only the
/// first one upper-case: `ßcafe` becomes `Sscafe`, not `SScafe`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_alpha = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_is_alpha {
                out.extend(ch.to_lowercase());
            } else {
                let mut upper = ch.to_uppercase();
                out.extend(upper.next());
                out.extend(upper.flat_map(char::to_lowercase));
            }
            prev_is_alpha = true;
        } else {
            out.push(ch);
            prev_is_alpha = false;
        }
    }

    out
}
