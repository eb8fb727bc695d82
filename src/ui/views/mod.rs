pub mod deploy;
pub mod list;
pub mod warnings;
