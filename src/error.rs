//! Errors for the Strix library
use thiserror::Error;

use crate::change::AppliedChange;

/// Error for the Strix library
#[derive(Debug, Error)]
pub enum StrixError {
    /// An expression or axiom has been built from operands of the
    /// wrong kind or arity
    #[error("Malformed Expression: {0}")]
    MalformedExpression(String),

    /// A change batch was aborted part way through. Changes before
    /// `failed_at` have been applied and remain in place; `applied`
    /// reports them, so that the caller can build an inverse batch.
    #[error("Change Application Error: batch aborted at change {failed_at}")]
    ChangeApplication {
        failed_at: usize,
        applied: Vec<AppliedChange>,
        #[source]
        source: Box<StrixError>,
    },

    /// A listener failed while a change batch was being delivered
    #[error("Listener Delivery Fault: {0}")]
    ListenerDelivery(#[source] Box<dyn std::error::Error + Send + Sync>),
}

macro_rules! malformed {
    ($($arg:tt)*) => {
        $crate::error::StrixError::MalformedExpression(format!($($arg)*))
    }
}

pub(crate) use malformed;

impl StrixError {
    pub fn malformed<S: Into<String>>(s: S) -> StrixError {
        StrixError::MalformedExpression(s.into())
    }
}
