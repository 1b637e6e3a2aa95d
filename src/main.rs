mod cli;

use std::path::Path;

use anyhow::Context;
use clap::Parser;

use cli::{Cli, Command};
use xsd_mindmap::pipeline::{self, SchemaSource, TaxonomyRun};
use xsd_mindmap::{Error, IgnoreSet};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        // Rendering failures keep their own exit code so callers can tell a
        // missing PlantUML installation from a broken schema.
        let code = match err.downcast_ref::<Error>() {
            Some(Error::Render(_)) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Schema {
            schema,
            root,
            output_dir,
            ignored_keys,
            allow_dtd,
        } => {
            let ignored = match &ignored_keys {
                Some(path) => IgnoreSet::load(path)?,
                None => IgnoreSet::empty(),
            };
            let source = SchemaSource::from_arg(&schema);
            let (path, _) =
                pipeline::generate_schema_text(&source, &root, &ignored, &output_dir, allow_dtd)
                    .with_context(|| format!("compiling {schema}"))?;
            println!("{}", path.display());
        }
        Command::Generate {
            base_dir,
            capec_schema,
            cwe_schema,
            capec_ignored,
            cwe_ignored,
            schema_out,
            puml_out,
            pdf_out,
            allow_dtd,
        } => {
            let runs = [
                TaxonomyRun {
                    label: "CAPEC",
                    schema: taxonomy_source(&base_dir, &capec_schema),
                    root: "attack_pattern".into(),
                    ignored_keys: Some(base_dir.join(capec_ignored)),
                },
                TaxonomyRun {
                    label: "CWE",
                    schema: taxonomy_source(&base_dir, &cwe_schema),
                    root: "weakness".into(),
                    ignored_keys: Some(base_dir.join(cwe_ignored)),
                },
            ];
            let artifacts = pipeline::run_all(
                &runs,
                &base_dir.join(schema_out),
                &base_dir.join(puml_out),
                &base_dir.join(pdf_out),
                allow_dtd,
            )
            .context("generating taxonomy artifacts")?;

            for (run, artifact) in runs.iter().zip(&artifacts) {
                println!("{}", run.label);
                println!("- schema: {}", artifact.schema_txt.display());
                println!("- puml:   {}", artifact.puml.display());
                println!("- pdf:    {}", artifact.pdf.display());
            }
        }
    }
    Ok(())
}

fn taxonomy_source(base_dir: &Path, arg: &str) -> SchemaSource {
    match SchemaSource::from_arg(arg) {
        SchemaSource::Path(path) => SchemaSource::Path(base_dir.join(path)),
        url => url,
    }
}
