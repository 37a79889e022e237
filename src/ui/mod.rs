pub mod context;
pub mod json;
pub mod terminal;
