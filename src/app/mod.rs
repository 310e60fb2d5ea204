// Terminal front end: turns input lines into session calls and renders the result.

pub mod commands;
pub mod repl;
pub mod view;
