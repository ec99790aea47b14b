//! serializable form of a [HamiltonianCycle]
use serde::{Deserialize, Serialize};

use crate::cycle::verify_cycle;
use crate::dimensions::GridDimensions;
use crate::error::GridError;
use crate::hamiltonian::HamiltonianCycle;

/// A built cycle as plain data. Loading one back checks that it is still a
/// hamiltonian cycle of its grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSnapshot {
    /// number of fine columns
    pub cols: usize,
    /// number of fine rows
    pub rows: usize,
    /// cell ids in visiting order
    pub cycle: Vec<usize>,
}

impl TryFrom<CycleSnapshot> for HamiltonianCycle {
    type Error = GridError;

    fn try_from(snapshot: CycleSnapshot) -> Result<Self, Self::Error> {
        let dimensions = GridDimensions::new(snapshot.cols, snapshot.rows)?;
        verify_cycle(&dimensions, &snapshot.cycle)?;
        Ok(HamiltonianCycle::from_verified_cycle(dimensions, snapshot.cycle))
    }
}

impl From<HamiltonianCycle> for CycleSnapshot {
    fn from(hc: HamiltonianCycle) -> Self {
        hc.snapshot()
    }
}

impl HamiltonianCycle {
    /// encodes this cycle as json
    pub fn to_json(&self) -> Result<String, GridError> {
        serde_json::to_string(&self.snapshot()).map_err(|e| GridError::MalformedSnapshot {
            reason: e.to_string(),
        })
    }

    /// decodes and validates a cycle written by [HamiltonianCycle::to_json]
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        let snapshot: CycleSnapshot =
            serde_json::from_str(json).map_err(|e| GridError::MalformedSnapshot {
                reason: e.to_string(),
            })?;
        HamiltonianCycle::try_from(snapshot)
    }
}
