//! Query and reply message types
//!
//! A query carries `query_type` plus, for `call`, the candidate `solution`.
//! Optional `id`, `timestamp` and `remarks` fields are echoed back for
//! correlation but never interpreted. Replies mirror the same optional
//! fields next to their own payload.

use serde::{Deserialize, Serialize};

/// Kind of an incoming query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    /// Evaluate a candidate solution
    Call,
    /// Reset counters and begin a fresh run
    NewRun,
    /// End the session
    Stop,
}

/// Kind of an outgoing reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyType {
    /// An objective value for a `call`
    Value,
    /// Acknowledgement of `new_run` / `stop`
    Ack,
    /// The query could not be served
    Error,
}

/// Correlation fields shared by queries and replies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    /// Caller-chosen message id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// ISO-8601 timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Free-form remarks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// An incoming query as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// What the driver wants
    pub query_type: QueryType,
    /// Candidate vector, required for `call`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<f64>>,
    /// Echoed correlation fields
    #[serde(flatten)]
    pub correlation: Correlation,
}

/// An outgoing reply as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// What kind of reply this is
    pub reply_type: ReplyType,
    /// Objective value, present on `value` replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// The originating solution, optionally echoed on `value` replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<f64>>,
    /// Error description, present and non-empty on `error` replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Numeric error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Echoed correlation fields
    #[serde(flatten)]
    pub correlation: Correlation,
}

impl Reply {
    /// A `value` reply.
    pub fn value(value: f64, correlation: Correlation) -> Self {
        Self {
            reply_type: ReplyType::Value,
            value: Some(value),
            solution: None,
            message: None,
            code: None,
            correlation,
        }
    }

    /// Echo the originating solution on a `value` reply.
    pub fn with_solution(mut self, solution: Vec<f64>) -> Self {
        self.solution = Some(solution);
        self
    }

    /// An `ack` reply.
    pub fn ack(correlation: Correlation) -> Self {
        Self {
            reply_type: ReplyType::Ack,
            value: None,
            solution: None,
            message: None,
            code: None,
            correlation,
        }
    }

    /// An `error` reply with a non-empty message.
    pub fn error(message: impl Into<String>, correlation: Correlation) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "error replies carry a message");
        Self {
            reply_type: ReplyType::Error,
            value: None,
            solution: None,
            message: Some(message),
            code: None,
            correlation,
        }
    }

    /// Attach a numeric code to an `error` reply.
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }
}

/// A query that passed validation, ready for the evaluation loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidQuery {
    /// Evaluate this candidate
    Call {
        /// Candidate vector, length >= 1
        solution: Vec<f64>,
        /// Fields to echo on the reply
        correlation: Correlation,
    },
    /// Reset counters and clear the logger grid
    NewRun {
        /// Fields to echo on the reply
        correlation: Correlation,
    },
    /// End the session
    Stop {
        /// Fields to echo on the reply
        correlation: Correlation,
    },
}

/// Error codes carried on `error` replies.
mod codes {
    pub const MALFORMED_JSON: i64 = 400;
    pub const MISSING_SOLUTION: i64 = 422;
}

/// Parse and validate one query.
///
/// A malformed query never propagates as an error to the transport: the
/// `Err` side is a ready-to-send `error` reply with a non-empty message.
pub fn parse_query(raw: &str) -> Result<ValidQuery, Box<Reply>> {
    let query: Query = serde_json::from_str(raw).map_err(|e| {
        Box::new(
            Reply::error(format!("malformed query: {}", e), Correlation::default())
                .with_code(codes::MALFORMED_JSON),
        )
    })?;

    let correlation = query.correlation;
    match query.query_type {
        QueryType::Call => match query.solution {
            Some(solution) if !solution.is_empty() => Ok(ValidQuery::Call {
                solution,
                correlation,
            }),
            Some(_) => Err(Box::new(
                Reply::error("call query requires a non-empty solution", correlation)
                    .with_code(codes::MISSING_SOLUTION),
            )),
            None => Err(Box::new(
                Reply::error("call query is missing the solution field", correlation)
                    .with_code(codes::MISSING_SOLUTION),
            )),
        },
        QueryType::NewRun => Ok(ValidQuery::NewRun { correlation }),
        QueryType::Stop => Ok(ValidQuery::Stop { correlation }),
    }
}
