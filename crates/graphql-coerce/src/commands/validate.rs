use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_coercion::schema::SchemaBuilder;
use libgraphql_coercion::types::ScalarType;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = match output_utils::find_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        ) {
            Ok(found) => found,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Error resolving input paths: {err}",
                output_utils::RED_X,
            )),
        };

        if !found.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors reading input paths: {:#?}",
                output_utils::RED_X,
                found.errors,
            ));
        }

        log::debug!(
            "Found {} GraphQL files to be validated.",
            found.file_paths.len(),
        );

        let build_result =
            SchemaBuilder::new()
                .load_files(found.file_paths.clone())
                .and_then(SchemaBuilder::build);

        match build_result {
            Ok(schema) => {
                let num_input_types =
                    schema.all_types()
                        .values()
                        .filter(|type_| {
                            !type_.as_scalar().is_some_and(ScalarType::is_builtin)
                        })
                        .count();

                CommandResult::stdout(format_args!(
                    concat!(
                        "{} All GraphQL validated successfully:\n",
                        "  * Analyzed {} files.\n",
                        "  * Skipped {} non-graphql files.\n",
                        "  * Validated {} input type definitions.",
                    ),
                    output_utils::GREEN_CHECK,
                    found.file_paths.len(),
                    found.num_skipped,
                    num_input_types,
                ))
            },

            Err(err) => CommandResult::stderr(format_args!(
                "{} Errors validating schema: {err}",
                output_utils::RED_X,
            )),
        }
    }
}
