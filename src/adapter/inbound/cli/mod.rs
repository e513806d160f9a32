//! Terminal front end: argument parsing, console I/O and the menu loop.

pub mod command;
pub mod console;
pub mod menu;
pub mod output;
