use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Render a parsed flyql tree as a SQL predicate
    Render {
        #[arg(long, help = "Field schema file (JSON array of field entries)")]
        fields: PathBuf,

        #[arg(long, help = "Parsed flyql tree file (JSON)")]
        tree: PathBuf,

        #[arg(
            long = "where",
            help = "Prefix the predicate with WHERE, printing nothing for an empty tree"
        )]
        where_clause: bool,

        #[arg(
            long,
            help = "If specified, writes the SQL to this file instead of stdout"
        )]
        output: Option<PathBuf>,
    },
    /// Print the normalized category of each backend type spelling
    Normalize {
        #[arg(required = true, help = "Declared column types, e.g. 'Nullable(Int64)'")]
        types: Vec<String>,
    },
    /// Print a field schema with the derived type information
    Fields {
        #[arg(long, help = "Field schema file (JSON array of field entries)")]
        fields: PathBuf,
    },
}
