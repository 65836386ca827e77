pub mod configuration;
pub mod error;
pub mod identities;
pub mod method;
pub mod sample;
pub mod template;

pub use configuration::{CONFIG_FILE, GeneratorConfig};
pub use error::AppError;
pub use identities::QualifiedName;
pub use method::{MethodDescriptor, TypeDescriptor};
pub use sample::{PreparedSample, SampleRequest};
pub use template::{PlaceholderMap, Template, TemplateDescriptor};
