use crate::git::LogWindow;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "git-daily")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "AI-assisted daily activity reports from git history",
    after_help = "\
Configuration:
  Put GEMINI_API_KEY in ~/.git-daily/.env (or export it) to have the
  report summarized by Gemini. Without a key the deterministic report
  is printed instead.

Examples:
  $ git-daily                        report on today's commits
  $ git-daily --since \"2 days ago\"   report since two days ago
  $ git-daily --since 2024-01-01     report since a specific date
  $ git-daily --author alice         only commits by alice
  $ git-daily --no-ai                skip the AI summary"
)]
pub struct Cli {
    /// Start of the reporting window (passed to git verbatim)
    #[arg(short, long, default_value = "midnight")]
    pub since: String,

    /// End of the reporting window (passed to git verbatim)
    #[arg(short, long, default_value = "now")]
    pub until: String,

    /// Only include commits by this author
    #[arg(short, long)]
    pub author: Option<String>,

    /// Disable AI summarization and print the deterministic report
    #[arg(long)]
    pub no_ai: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The log window described by the arguments
    pub fn window(&self) -> LogWindow {
        LogWindow::new(self.since.clone(), self.until.clone(), self.author.clone())
    }
}
