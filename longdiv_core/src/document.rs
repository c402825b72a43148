//! # Trace Document
//!
//! The on-disk form of a [`DivisionTrace`]: the trace plus a small metadata
//! header, stored as `.ldt.json`.
//!
//! ```json
//! {
//!   "meta": { "version": "0.1.0", "generated": "2025-01-01T00:00:00Z" },
//!   "trace": { ... }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::division::DivisionTrace;

/// Current schema version. Bump when the trace format changes.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Extension used for trace documents.
pub const TRACE_EXTENSION: &str = "ldt.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// When the trace was written
    pub generated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceDocument {
    pub meta: TraceMetadata,
    pub trace: DivisionTrace,
}

impl TraceDocument {
    /// Wrap `trace` with current-version metadata stamped now.
    pub fn new(trace: DivisionTrace) -> Self {
        TraceDocument {
            meta: TraceMetadata {
                version: SCHEMA_VERSION.to_string(),
                generated: Utc::now(),
            },
            trace,
        }
    }
}
