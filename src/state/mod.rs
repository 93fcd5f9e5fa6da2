// ============================================================================
// STATE MODULE - Shared mutable state (Rc<RefCell>) with notifications
// ============================================================================

pub mod reactivity;
pub mod token_store;

pub use reactivity::*;
pub use token_store::*;
