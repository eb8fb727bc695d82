pub mod blocks;
pub mod context;
pub mod editor;
pub mod error;
pub mod json;
pub mod logging;
pub mod primitives;
pub mod select;
pub mod terminal;
pub mod theme;
pub mod views;
