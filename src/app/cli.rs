//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, ConfigOverrides};
use crate::domain::{AppError, GeneratorConfig, MethodDescriptor, SampleRequest};
use crate::services::ConsoleStatusLogger;

#[derive(Parser)]
#[command(name = "classwriter")]
#[command(version)]
#[command(about = "Generate source files from placeholder templates", long_about = None)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalOptions {
    /// Configuration file (defaults to ./classwriter.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Folder containing template files
    #[arg(short = 't', long = "templates", global = true)]
    template_folder: Option<PathBuf>,
    /// Folder generated sources are written to
    #[arg(short = 'o', long = "output", global = true)]
    source_folder: Option<PathBuf>,
    /// File extension of templates and generated sources
    #[arg(short = 'e', long, global = true)]
    extension: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available class templates
    #[clap(visible_alias = "ls")]
    List,
    /// Create a class from a template
    #[clap(visible_alias = "c")]
    Class {
        /// Template file name, e.g. FooTemplate.java
        template: String,
        /// Package-qualified class name, e.g. com.example.Foo
        class: String,
    },
    /// Create one class per template inside a package
    #[clap(visible_alias = "a")]
    All {
        /// Target package, e.g. com.example
        #[arg(short, long)]
        package: String,
    },
    /// Create a sample class calling one remote method
    #[clap(visible_alias = "s")]
    Sample(SampleArgs),
}

#[derive(Args)]
struct SampleArgs {
    /// Package of the remote interface
    #[arg(long)]
    package: String,
    /// Simple name of the remote interface
    #[arg(long)]
    class: String,
    /// Name the remote object is bound to
    #[arg(short, long)]
    bound_name: String,
    /// Method signature, e.g. "java.lang.String login(java.lang.String, int[])"
    #[arg(long)]
    signature: String,
    /// Simple name of the generated sample class
    #[arg(long)]
    sample_class: String,
    /// Remote host
    #[arg(long)]
    host: String,
    /// Remote port
    #[arg(long)]
    port: u16,
}

impl SampleArgs {
    fn into_request(self) -> Result<SampleRequest, AppError> {
        let method: MethodDescriptor = self.signature.parse()?;
        Ok(SampleRequest {
            package_name: self.package,
            class_name: self.class,
            bound_name: self.bound_name,
            method,
            sample_class_name: self.sample_class,
            remote_host: self.host,
            remote_port: self.port,
        })
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let config = load_config(cli.options)?;

    match cli.command {
        Commands::List => run_list(&config),
        Commands::Class { template, class } => {
            let destination =
                api::write_class(&config, &template, &class, ConsoleStatusLogger::new())?;
            println!("✅ Created class at {}", destination.display());
            Ok(())
        }
        Commands::All { package } => {
            let written = api::write_all_classes(&config, &package, ConsoleStatusLogger::new())?;
            println!("✅ Created {} class(es)", written.len());
            Ok(())
        }
        Commands::Sample(args) => {
            let request = args.into_request()?;
            let destination = api::write_sample(&config, &request, ConsoleStatusLogger::new())?;
            println!("✅ Created sample at {}", destination.display());
            Ok(())
        }
    }
}

fn load_config(options: GlobalOptions) -> Result<GeneratorConfig, AppError> {
    let root = std::env::current_dir()?;
    let overrides = ConfigOverrides {
        template_folder: options.template_folder,
        source_folder: options.source_folder,
        extension: options.extension,
    };
    api::load_config(&root, options.config.as_deref(), overrides)
}

fn run_list(config: &GeneratorConfig) -> Result<(), AppError> {
    let templates = api::list_templates(config)?;
    if templates.is_empty() {
        println!("No templates found in {}", config.template_folder.display());
        return Ok(());
    }

    println!("Templates in {}:", config.template_folder.display());
    for template in templates {
        println!("  {} ({})", template.file_name(), template.base_name());
    }
    Ok(())
}
