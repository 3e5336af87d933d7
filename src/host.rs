//! Host-facing entry points.
//!
//! Hosts discover the shaper by name and await it. The shaping itself is
//! synchronous; the async wrapper exists only for the calling convention.

use crate::error::ShapeError;
use crate::shaper::shape_value;
use anyhow::{Context, Result};
use futures::future::{BoxFuture, FutureExt};
use futures::{stream, StreamExt};
use serde_json::Value;

/// Canonical entry point name.
pub const MAIN_FUNCTION: &str = "mainFunction";

/// Every name a host may use to reach the shaper.
pub const ENTRY_POINTS: &[&str] = &[MAIN_FUNCTION, "main", "userOpMessage"];

pub type HostFn = fn(Value) -> BoxFuture<'static, Result<Value, ShapeError>>;

/// Shape `params` and hand the message back as a JSON object.
pub async fn main_function(params: Value) -> Result<Value, ShapeError> {
    tracing::debug!(entry = MAIN_FUNCTION, "invoked");
    let msg = shape_value(params)?;
    serde_json::to_value(msg).map_err(ShapeError::Encode)
}

fn boxed_main_function(params: Value) -> BoxFuture<'static, Result<Value, ShapeError>> {
    main_function(params).boxed()
}

pub fn lookup(name: &str) -> Option<HostFn> {
    if ENTRY_POINTS.contains(&name) {
        Some(boxed_main_function as HostFn)
    } else {
        None
    }
}

/// Run `entry` over every item with at most `max_concurrency` in flight.
///
/// Results come back in input order. The first failing item (by index) fails
/// the whole batch; no partial output is returned.
pub async fn shape_batch(
    items: Vec<Value>,
    entry: HostFn,
    max_concurrency: usize,
) -> Result<Vec<Value>> {
    // `buffered` keeps results in input order
    let results: Vec<_> = stream::iter(items)
        .map(entry)
        .buffered(max_concurrency.max(1))
        .collect()
        .await;

    results
        .into_iter()
        .enumerate()
        .map(|(i, res)| res.with_context(|| format!("batch item {i} failed")))
        .collect()
}
