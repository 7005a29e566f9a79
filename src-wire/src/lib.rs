//! Query/reply message schema
//!
//! JSON boundary contract between a remote solver driver and an evaluation
//! server. The transport is external; this crate owns the message types,
//! their validation, and the rule that a malformed query becomes an `error`
//! reply instead of crashing the serving process.

pub mod messages;

pub use messages::{Correlation, Query, QueryType, Reply, ReplyType, ValidQuery, parse_query};
