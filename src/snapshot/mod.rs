//! Snapshot and resume functionality for the link.
//!
//! This module provides serialization and deserialization of the link's
//! register files, so long soak runs can be captured at a tick boundary
//! and resumed later, byte-for-byte. A snapshot carries the committed
//! registers only - never a queue of data, since the link holds at most
//! one datum.

use crate::core::{ConsumerRegs, Link, ProducerRegs};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a link at a tick boundary.
///
/// # Example
///
/// ```rust
/// use clasp::core::{Datum, Link, TickInput};
/// use clasp::snapshot::Snapshot;
///
/// let mut link = Link::new();
/// link.tick(&TickInput::send(Datum(0xB7)));
///
/// let snapshot = Snapshot::capture(&link, 1);
/// let restored = snapshot.restore().unwrap();
/// assert_eq!(&restored, &link);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was captured (capture metadata only; the core
    /// itself knows nothing of wall-clock time)
    pub created_at: DateTime<Utc>,

    /// The tick boundary at which the registers were committed
    pub tick: u64,

    /// Producer register file
    pub producer: ProducerRegs,

    /// Consumer register file
    pub consumer: ConsumerRegs,
}

impl Snapshot {
    /// Capture the link's registers as committed at tick `tick`.
    pub fn capture(link: &Link, tick: u64) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            tick,
            producer: link.producer().clone(),
            consumer: link.consumer().clone(),
        }
    }

    /// Reassemble a link from the captured registers.
    ///
    /// Fails if the snapshot was written by an unsupported format
    /// version.
    pub fn restore(&self) -> Result<Link, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(Link::from_regs(self.producer.clone(), self.consumer.clone()))
    }

    /// Serialize to human-readable JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to a compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}
