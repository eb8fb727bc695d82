//! Domain Layer
//!
//! Pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Module, Target and the Registry that owns them
//! - `value_objects/` - Root command, rotation, config warnings
//! - `services/` - Entity resolution and command synthesis
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
