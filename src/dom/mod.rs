// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod events;
pub mod render;

pub use element::*;
pub use events::*;
pub use render::*;
