use clap::Subcommand;

/// Tag subcommands
#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// Add tags to a note
    Add {
        /// Note title, filename or path
        path: String,

        /// Tags to add
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Remove tags from a note
    Remove {
        /// Note title, filename or path
        path: String,

        /// Tags to remove
        #[arg(required = true)]
        tags: Vec<String>,
    },
}
