//! Snapshot and resume functionality for flows.
//!
//! This module provides serialization and deserialization of a flow's
//! navigation history and context, so long-lived wizards can survive
//! process restarts. Configuration (routes, render payloads, hooks) is
//! not captured - a snapshot is restored into a freshly built flow.

pub mod error;

pub use error::SnapshotError;

use crate::controller::FlowState;
use crate::core::{Key, NavStack, Step};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of one flow's state.
///
/// # Example
///
/// ```rust
/// use screenflow::snapshot::FlowSnapshot;
/// use screenflow::builder::FlowBuilder;
/// use screenflow::config::ScreenDef;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Screen {
///     Form,
///     Review,
/// }
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Event {
///     Submit,
/// }
///
/// let mut flow = FlowBuilder::new()
///     .screen(Screen::Form, ScreenDef::new(()).to(Event::Submit, Screen::Review))
///     .screen(Screen::Review, ScreenDef::new(()))
///     .initial_screen(Screen::Form)
///     .initial_context(String::new())
///     .build()
///     .unwrap();
///
/// flow.forward(Event::Submit);
///
/// let json = flow.snapshot().to_json().unwrap();
/// let restored: FlowSnapshot<Screen, String> = FlowSnapshot::from_json(&json).unwrap();
/// assert_eq!(restored.history.len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "C: Serialize", deserialize = "C: Deserialize<'de>"))]
pub struct FlowSnapshot<K: Key, C> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Navigation history at capture time, oldest first
    pub history: NavStack<Step<K>>,

    /// Shared context at capture time
    pub context: C,
}

impl<K: Key, C> FlowSnapshot<K, C> {
    /// Capture a flow state.
    pub(crate) fn capture(state: &FlowState<K, C>) -> Self
    where
        C: Clone,
    {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            history: state.history.clone(),
            context: state.context.clone(),
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError>
    where
        C: Serialize,
    {
        serde_json::to_string(self).map_err(|e| SnapshotError::Serialize(e.to_string()))
    }

    /// Decode from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError>
    where
        C: DeserializeOwned,
    {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| SnapshotError::Deserialize(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError>
    where
        C: Serialize,
    {
        bincode::serialize(self).map_err(|e| SnapshotError::Serialize(e.to_string()))
    }

    /// Decode from compact binary, rejecting unsupported versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError>
    where
        C: DeserializeOwned,
    {
        let snapshot: Self =
            bincode::deserialize(bytes).map_err(|e| SnapshotError::Deserialize(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}
