//! Reflected method descriptions and their rendering into call-site arguments.

mod arguments;
mod descriptor;

pub use arguments::{FIRST_ARGUMENT_INDEX, argument_expression};
pub use descriptor::{MethodDescriptor, TypeDescriptor};
