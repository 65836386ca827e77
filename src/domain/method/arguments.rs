use super::TypeDescriptor;

/// Index of the first method argument in the generated `argv` array.
///
/// Index 0 holds the endpoint argument of the generated call site.
pub const FIRST_ARGUMENT_INDEX: usize = 1;

/// Render the argument list passed to the remote method in the sample.
///
/// Array-typed parameters are wrapped in `convertToArray(..)`; entries are joined
/// with `,` and the list is empty for zero-parameter methods.
pub fn argument_expression(parameters: &[TypeDescriptor]) -> String {
    parameters
        .iter()
        .enumerate()
        .map(|(offset, parameter)| {
            let index = FIRST_ARGUMENT_INDEX + offset;
            if parameter.is_array() {
                format!("convertToArray(argv[{index}])")
            } else {
                format!("argv[{index}]")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
