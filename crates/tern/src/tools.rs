//! The demo agent's tool surface: two stateless lookups plus the metadata
//! the hosting framework advertises for them. Results use the
//! status/report convention tool-calling frameworks expect, as plain JSON.
use chrono::{FixedOffset, Utc};
use serde_json::{json, Value};

use crate::models::tool::Tool;

/// Retrieve a weather report for a city.
///
/// Returns `{"status": "success", "report": ...}` when the city is known and
/// `{"status": "error", "error_message": ...}` otherwise.
pub fn get_weather(city: &str) -> Value {
    if city.trim().eq_ignore_ascii_case("new york") {
        json!({
            "status": "success",
            "report": "The weather in New York is sunny with a temperature of 25 degrees Celsius (77 degrees Fahrenheit)."
        })
    } else {
        json!({
            "status": "error",
            "error_message": format!("Weather information for '{city}' is not available.")
        })
    }
}

/// Report the current time in a city.
///
/// Only New York is known; its clock is rendered at the fixed Eastern
/// standard offset.
pub fn get_current_time(city: &str) -> Value {
    if !city.trim().eq_ignore_ascii_case("new york") {
        return json!({
            "status": "error",
            "error_message": format!("Sorry, I don't have timezone information for {city}.")
        });
    }

    let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
    let now = Utc::now().with_timezone(&eastern);
    json!({
        "status": "success",
        "report": format!(
            "The current time in {} is {}",
            city,
            now.format("%Y-%m-%d %H:%M:%S EST%z")
        )
    })
}

/// Tool metadata for [`get_weather`]
pub fn weather_tool() -> Tool {
    Tool::new(
        "get_weather",
        "Retrieves the current weather report for a specified city.",
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city, e.g. New York"
                }
            },
            "required": ["city"]
        }),
    )
}

/// Tool metadata for [`get_current_time`]
pub fn current_time_tool() -> Tool {
    Tool::new(
        "get_current_time",
        "Returns the current time in a specified city.",
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city, e.g. New York"
                }
            },
            "required": ["city"]
        }),
    )
}
