//! Tolerance defaults for planar geometry.
//!
//! Policy
//! - Defaults are fixed constants to avoid “tolerance juggling” across modules.
//!   All collinearity and on-segment checks go through `EPS`; no other literal
//!   tolerances appear in predicates.

/// Collinearity / degeneracy tolerance for cross-product predicates.
pub const EPS: f64 = 1e-9;

/// Multiplier on the input spread used to size the Bowyer–Watson super-triangle.
pub const SUPER_TRIANGLE_SCALE: f64 = 20.0;
