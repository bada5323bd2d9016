//! Order status state machine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// State transitions:
/// ```text
/// Created ──► Assigned ──► Completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order was registered and waits for a courier.
    #[default]
    Created,

    /// A courier was assigned to the order.
    Assigned,

    /// The order was delivered (terminal state).
    Completed,
}

impl OrderStatus {
    /// Returns true if moving from this status to `target` is legal.
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        matches!(
            (self, target),
            (OrderStatus::Created, OrderStatus::Assigned)
                | (OrderStatus::Assigned, OrderStatus::Completed)
        )
    }

    /// Returns true if this is a terminal status (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "Created",
            OrderStatus::Assigned => "Assigned",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = common::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(OrderStatus::Created),
            "Assigned" => Ok(OrderStatus::Assigned),
            "Completed" => Ok(OrderStatus::Completed),
            other => Err(common::errs::general_errors::value_is_invalid(
                "status", other,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OrderStatus; 3] = [
        OrderStatus::Created,
        OrderStatus::Assigned,
        OrderStatus::Completed,
    ];

    #[test]
    fn test_default_status_is_created() {
        assert_eq!(OrderStatus::default(), OrderStatus::Created);
    }

    #[test]
    fn test_only_forward_single_step_transitions() {
        for from in ALL {
            for to in ALL {
                let expected = matches!(
                    (from, to),
                    (OrderStatus::Created, OrderStatus::Assigned)
                        | (OrderStatus::Assigned, OrderStatus::Completed)
                );
                assert_eq!(from.can_transition_to(to), expected, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_terminal_status() {
        assert!(!OrderStatus::Created.is_terminal());
        assert!(!OrderStatus::Assigned.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
    }

    #[test]
    fn test_display_and_parse() {
        for status in ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>().unwrap(), status);
        }
        assert_eq!(
            "Lost".parse::<OrderStatus>().unwrap_err().code(),
            "value.is.invalid"
        );
    }

    #[test]
    fn test_serialization() {
        let status = OrderStatus::Assigned;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"Assigned\"");
        let deserialized: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }
}
