//! Orchestration of one taxonomy run: schema source in, artifacts out.
//! Runs share no state, so processing the known taxonomies one after the
//! other is just a loop.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::generator::{mindmap, pseudo};
use crate::ignore::IgnoreSet;
use crate::render::PlantUml;
use crate::resolve::{resolve, ResolvedNode};
use crate::xsd;

/// Where a schema document comes from: a local file or an URL.
#[derive(Clone, Debug)]
pub enum SchemaSource {
    Path(PathBuf),
    Url(String),
}

impl SchemaSource {
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    pub fn read(&self) -> Result<String, Error> {
        match self {
            Self::Path(path) => fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            }),
            Self::Url(url) => {
                tracing::info!(%url, "fetching schema");
                reqwest::blocking::get(url.as_str())
                    .and_then(|response| response.error_for_status())
                    .and_then(|response| response.text())
                    .map_err(|source| Error::Fetch {
                        url: url.clone(),
                        source,
                    })
            }
        }
    }
}

/// One taxonomy to process in a full pipeline run.
pub struct TaxonomyRun {
    pub label: &'static str,
    pub schema: SchemaSource,
    pub root: String,
    /// A missing file means no pruning; an unreadable one is an error.
    pub ignored_keys: Option<PathBuf>,
}

/// The files produced for one taxonomy.
pub struct Artifacts {
    pub schema_txt: PathBuf,
    pub puml: PathBuf,
    pub pdf: PathBuf,
}

fn parsing_options(allow_dtd: bool) -> roxmltree::ParsingOptions {
    let mut options = roxmltree::ParsingOptions::default();
    options.allow_dtd = allow_dtd;
    options
}

fn write_artifact(dir: &Path, file_name: String, contents: &str) -> Result<PathBuf, Error> {
    fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(file_name);
    fs::write(&path, contents).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Resolves `root` against the schema and writes `<root>.schema.txt` under
/// `out_dir`. Returns the written path along with the resolved tree so a
/// full pipeline run can feed the same tree to the mindmap emitter.
pub fn generate_schema_text(
    source: &SchemaSource,
    root: &str,
    ignored: &IgnoreSet,
    out_dir: &Path,
    allow_dtd: bool,
) -> Result<(PathBuf, ResolvedNode), Error> {
    let text = source.read()?;
    let schema = xsd::parse_schema(&text, parsing_options(allow_dtd))?;
    let tree = resolve(root, &schema, ignored)?;
    tracing::info!(root = %tree.name, ignored = ignored.len(), "schema resolved");

    let rendered = pseudo::generate(&tree);
    let path = write_artifact(out_dir, format!("{}.schema.txt", tree.name), &rendered)?;
    tracing::info!(path = %path.display(), "pseudo-schema written");
    Ok((path, tree))
}

/// Full single-taxonomy pipeline: pseudo-schema text, PlantUML mind map,
/// and one PDF conversion attempt.
pub fn generate_one(
    run: &TaxonomyRun,
    schema_out: &Path,
    puml_out: &Path,
    pdf_out: &Path,
    allow_dtd: bool,
    renderer: &PlantUml,
) -> Result<Artifacts, Error> {
    let ignored = match &run.ignored_keys {
        Some(path) if path.exists() => IgnoreSet::load(path)?,
        _ => IgnoreSet::empty(),
    };

    let (schema_txt, tree) =
        generate_schema_text(&run.schema, &run.root, &ignored, schema_out, allow_dtd)?;

    let title = format!("{} mindmap", tree.name);
    let diagram = mindmap::generate(&tree, Some(&title));
    let puml = write_artifact(puml_out, format!("{}.puml", tree.name), &diagram)?;
    tracing::info!(path = %puml.display(), "mind map written");

    let pdf = renderer.render_pdf(&puml, pdf_out)?;
    Ok(Artifacts {
        schema_txt,
        puml,
        pdf,
    })
}

/// Processes every taxonomy in order. The first failure aborts the run;
/// there is no partial-continue past a broken taxonomy.
pub fn run_all(
    runs: &[TaxonomyRun],
    schema_out: &Path,
    puml_out: &Path,
    pdf_out: &Path,
    allow_dtd: bool,
) -> Result<Vec<Artifacts>, Error> {
    let renderer = PlantUml::locate()?;
    runs.iter()
        .map(|run| {
            tracing::info!(taxonomy = run.label, "processing");
            generate_one(run, schema_out, puml_out, pdf_out, allow_dtd, &renderer)
        })
        .collect()
}
