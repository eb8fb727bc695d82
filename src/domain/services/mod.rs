//! Domain Services
//!
//! Pure logic that operates on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod command_synthesizer;
mod resolver;

pub use command_synthesizer::synthesize;
pub use resolver::EntityResolver;
