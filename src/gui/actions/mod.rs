// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load,extract,poll_extract,export,copy}.

mod copy;
mod export;
mod extract;
mod load;

pub use copy::copy;
pub use export::export;
pub use extract::{extract, poll_extract};
pub use load::load;
