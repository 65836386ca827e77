use std::path::PathBuf;

use super::{class, list, load};
use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{NameValidator, SourceWriter, StatusLogger, TemplateStore};

/// Instantiate every generic template into `package`.
///
/// `FooTemplate.java` becomes `<package>.Foo`. Stops at the first failure;
/// classes already written stay on disk.
pub fn execute<T, S, V, L>(
    ctx: &mut AppContext<T, S, V, L>,
    package: &str,
) -> Result<Vec<PathBuf>, AppError>
where
    T: TemplateStore,
    S: SourceWriter,
    V: NameValidator,
    L: StatusLogger,
{
    let templates = list::execute(ctx)?;
    if templates.is_empty() {
        ctx.logger().info("No generic templates found");
    }

    let mut written = Vec::with_capacity(templates.len());
    for descriptor in templates {
        let full_class_name = format!("{}.{}", package, descriptor.base_name());
        ctx.logger().info(&format!(
            "Generating {} from '{}'",
            full_class_name,
            descriptor.file_name()
        ));
        let template = load::execute(ctx, descriptor.file_name())?;
        written.push(class::execute(ctx, template, &full_class_name)?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::IdentifierValidator;
    use crate::testing::{MemorySourceWriter, MemoryTemplateStore, RecordingLogger};

    const CLASS_TEXT: &str = "package <PACKAGENAME>; class <CLASSNAME> {}";

    #[test]
    fn announces_each_template_before_writing_it() {
        let store = MemoryTemplateStore::new()
            .with_template("BarTemplate.java", CLASS_TEXT)
            .with_template("FooTemplate.java", CLASS_TEXT)
            .with_template(MemoryTemplateStore::SAMPLE_TEMPLATE, "");
        let mut ctx =
            AppContext::new(store, MemorySourceWriter::new(), IdentifierValidator, RecordingLogger::new());

        let written = execute(&mut ctx, "de.example").unwrap();

        assert_eq!(written, vec![PathBuf::from("sources/Bar.java"), PathBuf::from("sources/Foo.java")]);
        assert_eq!(ctx.sources().source("Foo").unwrap(), "package de.example; class Foo {}");
        assert_eq!(
            ctx.into_logger().lines,
            vec![
                "Generating de.example.Bar from 'BarTemplate.java'",
                "Reading template file: 'templates/BarTemplate.java'... done.",
                "Writing class 'sources/Bar.java' to disk... done.",
                "Generating de.example.Foo from 'FooTemplate.java'",
                "Reading template file: 'templates/FooTemplate.java'... done.",
                "Writing class 'sources/Foo.java' to disk... done.",
            ]
        );
    }

    #[test]
    fn reports_empty_template_folder() {
        let store = MemoryTemplateStore::new().with_template(MemoryTemplateStore::SAMPLE_TEMPLATE, "");
        let mut ctx =
            AppContext::new(store, MemorySourceWriter::new(), IdentifierValidator, RecordingLogger::new());

        assert!(execute(&mut ctx, "de.example").unwrap().is_empty());
        assert_eq!(ctx.into_logger().lines, vec!["No generic templates found"]);
    }

    #[test]
    fn rejects_invalid_package_before_writing() {
        let store = MemoryTemplateStore::new().with_template("FooTemplate.java", CLASS_TEXT);
        let mut ctx =
            AppContext::new(store, MemorySourceWriter::new(), IdentifierValidator, RecordingLogger::new());

        let err = execute(&mut ctx, "de example").unwrap_err();

        assert!(matches!(err, AppError::InvalidCharacter { .. }));
        assert!(ctx.sources().is_empty());
    }
}
