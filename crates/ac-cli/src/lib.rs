pub mod commands;
pub mod script;
pub mod table;
