pub mod qualified_name;
pub mod validation;

pub use qualified_name::QualifiedName;
