//! Growth Manager: transcript qualification scoring and pipeline-stage automation.
//!
//! The crate exposes one workflow, [`workflows::qualification`], which turns a
//! raw sales-call transcript into a qualification score, a set of detected pain
//! points, a business-size bucket, and (when the score clears the threshold) a
//! pipeline-stage advancement against the prospect store.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
