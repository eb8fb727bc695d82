//! Registry management: init, add/remove entities, sort and debug toggle.

mod use_case;

pub use use_case::RegistryUseCase;
