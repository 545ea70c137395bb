// ============================================================================
// Order Book Errors
// ============================================================================

use thiserror::Error;

use super::OrderId;

/// Errors reported by the validating entry points.
///
/// The core operations (`add_order`, `match_orders`) never fail; these are
/// only produced by `try_add_order` and configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderBookError {
    #[error("order {0} has zero quantity")]
    ZeroQuantity(OrderId),

    #[error("order {0} has zero price")]
    ZeroPrice(OrderId),

    #[error("order id {0} was already submitted to this book")]
    DuplicateOrderId(OrderId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type OrderBookResult<T> = Result<T, OrderBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            OrderBookError::ZeroQuantity(OrderId::new(4)).to_string(),
            "order #4 has zero quantity"
        );
        assert_eq!(
            OrderBookError::InvalidConfig("name cannot be empty".to_string()).to_string(),
            "invalid configuration: name cannot be empty"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            OrderBookError::ZeroPrice(OrderId::new(1)),
            OrderBookError::ZeroPrice(OrderId::new(1))
        );
        assert_ne!(
            OrderBookError::ZeroPrice(OrderId::new(1)),
            OrderBookError::ZeroQuantity(OrderId::new(1))
        );
    }
}
