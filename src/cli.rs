use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(version, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile one XSD schema into a pseudo-schema text file
    Schema {
        #[clap(long, help = "The schema source file or URL")]
        schema: String,

        #[clap(long, help = "Root element or type name (e.g. attack_pattern)")]
        root: String,

        #[clap(long, default_value = ".", help = "Output directory")]
        output_dir: PathBuf,

        #[clap(long, help = "File listing lineage paths to prune")]
        ignored_keys: Option<PathBuf>,

        #[clap(long, help = "Allow a XML Document Type Definition (DTD) to occur")]
        allow_dtd: bool,
    },

    /// Generate pseudo-schemas, mind maps and PDFs for the CAPEC and CWE
    /// taxonomies
    Generate {
        #[clap(long, default_value = ".", help = "Project root directory")]
        base_dir: PathBuf,

        #[clap(long, default_value = "schemas/ap_schema_latest.xsd.xml")]
        capec_schema: String,

        #[clap(long, default_value = "schemas/cwe_schema_latest.xsd.xml")]
        cwe_schema: String,

        #[clap(long, default_value = "capec_ignored_keys.txt")]
        capec_ignored: PathBuf,

        #[clap(long, default_value = "cwe_ignored_keys.txt")]
        cwe_ignored: PathBuf,

        #[clap(long, default_value = "generated/schemas")]
        schema_out: PathBuf,

        #[clap(long, default_value = "generated/puml")]
        puml_out: PathBuf,

        #[clap(long, default_value = "generated/pdf")]
        pdf_out: PathBuf,

        #[clap(long, help = "Allow a XML Document Type Definition (DTD) to occur")]
        allow_dtd: bool,
    },
}
