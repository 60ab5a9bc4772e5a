use serde::{Deserialize, Serialize};

/// Store-assigned identifier for an order.
///
/// Wraps the integer key so order IDs cannot be mixed up with prices,
/// counts, or other numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Creates an order ID from a raw integer key.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the first ID handed out by a fresh store.
    pub fn first() -> Self {
        Self(1)
    }

    /// Returns the ID that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the underlying integer key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for i64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_next_increments() {
        assert_eq!(OrderId::first().next(), OrderId::new(2));
    }

    #[test]
    fn order_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&OrderId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn order_id_display() {
        assert_eq!(OrderId::new(7).to_string(), "7");
    }
}
