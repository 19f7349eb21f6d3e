//! Navigation focus event wire schema.
//!
//! The schema is wire-exact for interop with column-view consumers: event
//! name `FOCUS_ON_COLUMN`, camelCase payload keys. Events are messages, not
//! state: constructed at press time, published once, immediately discarded.

use serde::{Deserialize, Serialize};

/// Event name carried on the navigation channel.
pub const FOCUS_ON_COLUMN: &str = "FOCUS_ON_COLUMN";

/// Asks the column view to scroll to, and optionally highlight, a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusEvent {
    /// Target column identifier
    pub column_id: String,
    /// Target column's position at emission time
    pub column_index: usize,
    /// Whether the receiving view should animate the transition
    pub animated: bool,
    /// Whether the receiving view should visually flash the target
    pub highlight: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_keys_are_camel_case_exact() {
        let event = FocusEvent {
            column_id: "B".into(),
            column_index: 1,
            animated: true,
            highlight: false,
        };
        let value = serde_json::to_value(&event).expect("serialize FocusEvent");
        assert_eq!(
            value,
            serde_json::json!({
                "columnId": "B",
                "columnIndex": 1,
                "animated": true,
                "highlight": false,
            })
        );
    }

    #[test]
    fn payload_round_trips() {
        let json = r#"{"columnId":"A","columnIndex":0,"animated":false,"highlight":true}"#;
        let event: FocusEvent = serde_json::from_str(json).expect("deserialize FocusEvent");
        assert_eq!(event.column_id, "A");
        assert_eq!(event.column_index, 0);
        assert!(!event.animated);
        assert!(event.highlight);
    }
}
