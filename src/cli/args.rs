use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note body (`-` reads it from stdin)
    #[arg(long, short)]
    pub content: Option<String>,

    /// Tags (can be specified multiple times)
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Parent note (title, filename or path) to nest the note under
    #[arg(long, short)]
    pub parent: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Note title, filename or path
    pub path: String,

    /// Resolve bare titles among this note's children
    #[arg(long, short)]
    pub parent: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Note title, filename or path
    pub path: String,

    /// New note body (`-` reads it from stdin)
    #[arg(long, short)]
    pub content: Option<String>,

    /// Replacement tags (can be specified multiple times)
    #[arg(long, short, action = clap::ArgAction::Append, conflicts_with = "keep_tags")]
    pub tag: Vec<String>,

    /// Leave the existing tags untouched
    #[arg(long)]
    pub keep_tags: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// List the children of this note instead of the top level
    #[arg(long, short)]
    pub parent: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Note title, filename or path
    pub path: String,
}

#[derive(Args, Debug, Clone)]
pub struct MoveArgs {
    /// Note title, filename or path
    pub path: String,

    /// Destination note or folder (the top level when omitted)
    #[arg(long)]
    pub to: Option<String>,
}
