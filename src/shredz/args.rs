use clap::Parser;
use shredz::pattern::FillPattern;
use std::path::PathBuf;

/// Returns the version string, with git hash and commit date when built
/// from a checkout. Format: "0.3.2" or "0.3.2 (abc1234 2024-01-15)".
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{} ({} {})", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shred", bin_name = "shred", version = get_version())]
#[command(
    about = "Overwrite a file's contents in place, then remove it",
    long_about = "Overwrite a file's contents in place, sync every pass to stable \
                  storage, then remove it. Overwriting makes the data unrecoverable \
                  by normal filesystem means; see the README for what journaling and \
                  flash hardware can still retain."
)]
pub struct Cli {
    /// Path of the file to shred
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Number of overwrite passes
    #[arg(
        short = 'n',
        long,
        value_name = "COUNT",
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub passes: u32,

    /// Fill pattern applied on every pass
    #[arg(short, long, value_enum, value_name = "PATTERN", default_value_t = FillPattern::Zeros)]
    pub pattern: FillPattern,
}
