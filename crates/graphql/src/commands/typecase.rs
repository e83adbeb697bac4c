use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_client::DataDict;
use libgraphql_client::ParentType;
use libgraphql_client::selection_set::type_case;
use libgraphql_client::types::TypeCatalogue;
use libgraphql_client::types::TypeCatalogueBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct TypeCaseCmd {
    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        long,
        num_args=1..,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    schema_file_exts: Vec<String>,

    #[arg(
        help="Names of interface, object, or union types to check each \
             response entity against.",
        long,
        num_args=1..,
    )]
    target: Vec<String>,

    #[arg(
        help="Paths to one or more JSON response entities or directories \
             containing `.json` files.",
        name="RESPONSE_PATHS",
        required=true,
    )]
    response_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for TypeCaseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        let schema_exts = normalize_exts(&self.schema_file_exts);
        let schema_paths = collect_files(
            &self.schema,
            &schema_exts,
            &mut errors,
        );
        log::debug!("Found {} schema files.", schema_paths.len());

        let catalogue = match load_catalogue(&schema_paths) {
            Ok(catalogue) => catalogue,
            Err(e) => {
                errors.push(format!("{e:#}"));
                return CommandResult::stderr(format_args!(
                    "{} Errors loading schema:\n{}",
                    output_utils::RED_X,
                    errors.join("\n"),
                ));
            },
        };

        let mut targets: Vec<ParentType> = vec![];
        for name in &self.target {
            match catalogue.parent_type(name) {
                Some(parent_type) => targets.push(parent_type),
                None => errors.push(format!(
                    "`{name}` is not an interface, object, or union type \
                    defined in the schema.",
                )),
            }
        }

        let response_exts = normalize_exts(&["json".to_string()]);
        let response_paths = collect_files(
            &self.response_paths,
            &response_exts,
            &mut errors,
        );
        log::debug!("Found {} response files.", response_paths.len());

        let mut lines = vec![];
        for path in &response_paths {
            let data = match load_response(path) {
                Ok(data) => data,
                Err(e) => {
                    errors.push(format!("{}: {e:#}", path.display()));
                    continue
                },
            };
            lines.push(describe_entity(path, &data, &catalogue, &targets));
        }

        let stdout = lines.join("\n");
        if errors.is_empty() {
            CommandResult::stdout(format_args!("{stdout}"))
        } else {
            CommandResult::with_errors(stdout, format!(
                "{} {} errors:\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.join("\n"),
            ))
        }
    }
}

fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect()
}

/// Finds all files recursively located at or under each path whose extension
/// is in `exts`. A path passed directly as a file is kept regardless of its
/// extension.
fn collect_files(
    paths: &[PathBuf],
    exts: &HashSet<String>,
    errors: &mut Vec<String>,
) -> Vec<PathBuf> {
    let mut file_paths = vec![];
    for path in paths {
        if path.is_file() {
            log::trace!("Using explicitly specified file {path:#?}.");
            file_paths.push(path.to_owned());
            continue
        }

        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {entry_path:#?}.");
                        continue
                    }
                    if let Some(ext) = entry_path.extension()
                        && exts.contains(ext.to_string_lossy().as_ref()) {
                        log::trace!("Found file at {entry_path:#?}.");
                        file_paths.push(entry_path.to_owned());
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    errors.push(e.to_string());
                },
            }
        }
    }
    file_paths.sort();
    file_paths
}

fn load_catalogue(paths: &[PathBuf]) -> anyhow::Result<TypeCatalogue> {
    let catalogue = TypeCatalogueBuilder::new()
        .load_files(paths)?
        .build()?;
    log::debug!(
        "Loaded {} object types, {} interface types, and {} union types.",
        catalogue.object_types().len(),
        catalogue.interface_types().len(),
        catalogue.union_types().len(),
    );
    Ok(catalogue)
}

fn load_response(path: &Path) -> anyhow::Result<DataDict> {
    let content = libgraphql_client::file_reader::read_content(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    Ok(DataDict::from_value(value, None)?)
}

fn describe_entity(
    path: &Path,
    data: &DataDict,
    catalogue: &TypeCatalogue,
    targets: &[ParentType],
) -> String {
    let typename = data.typename().unwrap_or("<missing>");
    let concrete_type = type_case::resolve_concrete_type(data, catalogue);
    if concrete_type.is_none() {
        log::warn!(
            "{}: `__typename` `{typename}` does not name an object type in \
            the schema.",
            path.display(),
        );
    }

    let mut line = format!(
        "{}: __typename={typename} concrete={}",
        path.display(),
        concrete_type.map_or("unknown", |object_type| object_type.typename()),
    );
    for target in targets {
        let mark =
            if type_case::matches_type_case(data, catalogue, target) {
                output_utils::GREEN_CHECK
            } else {
                output_utils::RED_X
            };
        line.push_str(&format!(" {}{mark}", target.name()));
    }
    line
}
