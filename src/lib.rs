#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Hamiltonian cycles over even by even grids, for snake agents that want a
//! path guaranteed to visit every cell before coming back to the start.
//!
//! The construction runs in two steps:
//! 1. [maze::generate_maze] builds a random spanning tree over the half
//!    resolution grid, where each parent cell stands for a 2x2 block of cells.
//! 2. [cycle::build_cycle] walks the full grid around that tree, which always
//!    traces a single closed loop through every cell.
//!
//! [HamiltonianCycle] runs both steps once and then answers successor queries.
//! ```
//! use hcycle_grid::HamiltonianCycle;
//!
//! let hc = HamiltonianCycle::new(30, 30);
//! assert_eq!(hc.get_hcycle().len(), 900);
//! // positions wrap: the last position is followed by the first cell
//! assert_eq!(hc.get_next_pos(899), hc.get_hcycle()[0]);
//! ```
//! With a seed the same cycle comes back every time:
//! ```
//! use hcycle_grid::{CycleConfig, HamiltonianCycle};
//!
//! let config = CycleConfig::new(8, 4).with_seed(17);
//! let a = HamiltonianCycle::from_config(&config).unwrap();
//! let b = HamiltonianCycle::from_config(&config).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod config;
pub mod cycle;
pub mod debug;
pub mod dimensions;
pub mod error;
pub mod hamiltonian;
pub mod maze;
pub mod snapshot;
pub mod types;

pub use config::CycleConfig;
pub use dimensions::GridDimensions;
pub use error::GridError;
pub use hamiltonian::HamiltonianCycle;
pub use snapshot::CycleSnapshot;
pub use types::Direction;
