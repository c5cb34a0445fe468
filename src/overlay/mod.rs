mod router;
mod size_fields;

pub use router::{InputRouter, RouterEvent};
pub use size_fields::{ResizeCommand, SizeFields};
