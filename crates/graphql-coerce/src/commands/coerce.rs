use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_coercion::coerce_input_value;
use libgraphql_coercion::coerce_input_value_collecting;
use libgraphql_coercion::schema::Schema;
use libgraphql_coercion::schema::SchemaBuilder;
use libgraphql_coercion::types::TypeAnnotation;
use libgraphql_coercion::Value;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CoerceCmd {
    #[arg(
        help="Stop at the first error found in each value file.",
        long,
    )]
    fail_fast: bool,

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
    graphql_file_exts: Vec<String>,

    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for value \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    json_file_exts: Vec<String>,

    #[arg(
        help="Paths to the GraphQL schema files (or directories of schema \
             files) that define the input types.",
        long,
        num_args=1..,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="The input type to coerce each value to, e.g. `[Filter!]!`.",
        long="type",
    )]
    type_annotation: TypeAnnotation,

    #[arg(
        help="Paths to one or more JSON files or directories containing JSON \
             files, each holding one value to coerce.",
        name="VALUE_PATHS",
        required=true,
    )]
    value_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CoerceCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.load_schema() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err}",
                output_utils::RED_X,
            )),
        };

        if !schema.is_defined(&self.type_annotation) {
            return CommandResult::stderr(format_args!(
                "{} Type `{}` is not an input type defined by the schema.",
                output_utils::RED_X,
                self.type_annotation,
            ));
        }

        let found = match output_utils::find_files(
            &self.value_paths,
            &self.json_file_exts,
        ) {
            Ok(found) if found.errors.is_empty() => found,
            Ok(found) => return CommandResult::stderr(format_args!(
                "{} Errors reading value paths: {:#?}",
                output_utils::RED_X,
                found.errors,
            )),
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Error resolving value paths: {err}",
                output_utils::RED_X,
            )),
        };

        log::debug!(
            "Coercing {} value files to `{}`.",
            found.file_paths.len(),
            self.type_annotation,
        );

        let mut output = String::new();
        let mut num_failed = 0;
        for file_path in &found.file_paths {
            match self.coerce_file(&schema, file_path) {
                Ok(coerced) => {
                    let json = serde_json::to_string_pretty(&coerced.to_json())
                        .unwrap_or_else(|err| format!("<unprintable: {err}>"));
                    let _ = writeln!(
                        output,
                        "{} {}:\n{json}",
                        output_utils::GREEN_CHECK,
                        file_path.display(),
                    );
                },

                Err(messages) => {
                    num_failed += 1;
                    let _ = writeln!(
                        output,
                        "{} {}:",
                        output_utils::RED_X,
                        file_path.display(),
                    );
                    for message in messages {
                        let _ = writeln!(output, "  * {message}");
                    }
                },
            }
        }

        let summary = format!(
            "Coerced {} of {} value files to `{}`.",
            found.file_paths.len() - num_failed,
            found.file_paths.len(),
            self.type_annotation,
        );
        if num_failed == 0 {
            CommandResult::stdout(format_args!("{output}{summary}"))
        } else {
            CommandResult::stdout_failure(format_args!("{output}{summary}"))
        }
    }
}
impl CoerceCmd {
    fn load_schema(&self) -> anyhow::Result<Schema> {
        let found = output_utils::find_files(&self.schema, &self.graphql_file_exts)?;
        if let Some(err) = found.errors.into_iter().next() {
            anyhow::bail!("Error reading schema paths: {err}");
        }
        log::debug!("Loading {} schema files.", found.file_paths.len());
        Ok(SchemaBuilder::new().load_files(found.file_paths)?.build()?)
    }

    /// Coerce the JSON value held in `file_path`, returning either the
    /// coerced value or one message per error.
    fn coerce_file(
        &self,
        schema: &Schema,
        file_path: &Path,
    ) -> Result<Value, Vec<String>> {
        let content = std::fs::read_to_string(file_path)
            .map_err(|err| vec![format!("Error reading file: {err}")])?;
        let json: serde_json::Value = serde_json::from_str(content.as_str())
            .map_err(|err| vec![format!("Error parsing JSON: {err}")])?;
        let value = Value::from(json);

        if self.fail_fast {
            return coerce_input_value(schema, &value, &self.type_annotation)
                .map_err(|err| vec![err.to_string()]);
        }

        let (coerced, errors) =
            coerce_input_value_collecting(schema, &value, &self.type_annotation);
        if errors.is_empty() {
            Ok(coerced)
        } else {
            Err(errors.iter().map(ToString::to_string).collect())
        }
    }
}
