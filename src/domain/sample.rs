//! Inputs and result of sample generation.

use crate::domain::method::{MethodDescriptor, argument_expression};
use crate::domain::template::{PlaceholderMap, tokens};

/// Everything needed to specialize the sample template for one remote method.
#[derive(Debug, Clone)]
pub struct SampleRequest {
    /// Package of the remote interface.
    pub package_name: String,
    /// Simple name of the remote interface.
    pub class_name: String,
    /// Registry name the remote object is bound to.
    pub bound_name: String,
    pub method: MethodDescriptor,
    /// Simple name of the generated sample class.
    pub sample_class_name: String,
    pub remote_host: String,
    pub remote_port: u16,
}

impl SampleRequest {
    /// Placeholder bindings for the sample template, in substitution order.
    pub fn bindings(&self) -> PlaceholderMap {
        let mut bindings = PlaceholderMap::new();
        bindings
            .bind(tokens::PACKAGE, format!("{}.{}", self.package_name, self.class_name))
            .bind(tokens::CLASS_NAME, self.sample_class_name.as_str())
            .bind(tokens::METHOD_SIGNATURE, self.method.signature())
            .bind(tokens::REMOTE_HOST, self.remote_host.as_str())
            .bind(tokens::REMOTE_PORT, self.remote_port.to_string())
            .bind(tokens::BOUND_NAME, self.bound_name.as_str())
            .bind(tokens::CLASS, self.class_name.as_str())
            .bind(tokens::METHOD_NAME, self.method.name.as_str())
            .bind(tokens::RETURN_TYPE, self.method.return_type.name())
            .bind(tokens::ARG_COUNT, self.method.parameter_count().to_string())
            .bind(tokens::ARGUMENTS, argument_expression(&self.method.parameters));
        bindings
    }
}

/// Sample source text ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSample {
    pub class_name: String,
    pub text: String,
}
