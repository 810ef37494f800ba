pub mod path;
pub mod pattern;
pub mod table;
