// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod panel_state;

pub use panel_state::*;
