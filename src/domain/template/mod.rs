//! Template text, template file naming and placeholder bindings.

mod descriptor;
mod placeholders;
mod text;

pub use descriptor::{TEMPLATE_SUFFIX, TemplateDescriptor, is_generic_template_name};
pub use placeholders::{PlaceholderMap, placeholder_token, tokens};
pub use text::Template;
