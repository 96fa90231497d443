pub mod align;
pub mod report;

pub use align::{align, Alignment, Edit, EditTag, Hunk};
pub use report::{DiffLine, DiffReport};
