//! Cut separation for the clique relaxation.
//!
//! Two procedures find inequalities that are valid for every clique
//! indicator vector but violated by the current relaxation point:
//!
//! - **Independent-set separation** (fractional points): greedy-color the
//!   support and pick the heaviest color class; it is a cut when its weight
//!   exceeds 1.
//! - **Disconnected-pair separation** (integral points): every non-adjacent
//!   pair of selected vertices gives `x_u + x_v <= 1`. The relaxation admits
//!   integral non-cliques, so these cuts are required for correctness.
//!
//! # Key Types
//!
//! - [`Separator`]: both procedures bound to one graph and tolerance set
//! - [`ViolatedSet`]: the most violated independent set and its weight

mod separator;

pub use separator::{Separator, ViolatedSet};
