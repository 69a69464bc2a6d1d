use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for
/// non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "khana", bin_name = "khana", version = get_version())]
#[command(about = "A fast command-line recipe box", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new recipe
    #[command(alias = "new")]
    Add {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// One ingredient per flag (repeatable)
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        /// One step per flag (repeatable)
        #[arg(long = "step")]
        steps: Vec<String>,

        /// Preparation time in minutes
        #[arg(long)]
        prep: Option<String>,

        /// Cooking time in minutes
        #[arg(long)]
        cook: Option<String>,

        /// easy, medium or hard
        #[arg(long)]
        difficulty: Option<String>,

        /// Absolute http(s) URL of a picture
        #[arg(long)]
        image_url: Option<String>,
    },

    /// List recipes, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Match against title and description
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to one difficulty
        #[arg(short, long, value_parser = ["easy", "medium", "hard", "all"])]
        difficulty: Option<String>,

        /// Only recipes up to this many total minutes (0 = no limit)
        #[arg(short, long)]
        max_time: Option<u32>,
    },

    /// Show one recipe in full
    #[command(alias = "view")]
    Show {
        /// Recipe id (or unique prefix)
        id: String,
    },

    /// Edit a recipe; omitted flags keep their stored values
    #[command(alias = "e")]
    Edit {
        /// Recipe id (or unique prefix)
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// One ingredient per flag (repeatable, replaces the stored list)
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        /// One step per flag (repeatable, replaces the stored list)
        #[arg(long = "step")]
        steps: Vec<String>,

        #[arg(long)]
        prep: Option<String>,

        #[arg(long)]
        cook: Option<String>,

        #[arg(long)]
        difficulty: Option<String>,

        #[arg(long)]
        image_url: Option<String>,
    },

    /// Remove a recipe
    #[command(alias = "delete")]
    Rm {
        /// Recipe id (or unique prefix)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set the colour theme
    Theme {
        /// light or dark (omit to print the current theme)
        #[arg(value_parser = ["light", "dark"])]
        value: Option<String>,
    },
}
