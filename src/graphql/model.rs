pub mod todo;

pub use todo::{RootQuery, Todo};
