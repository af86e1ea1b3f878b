use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use diff_outline::{DiffSummary, build_file_tree, render_tree, set_expanded};
use error_set::error_set;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

error_set! {
    /// Errors surfaced by the command-line front end
    CliError := InputError || OutputError

    /// Errors reading the diff text
    InputError := {
        #[display("Failed to read {path}: {message}")]
        ReadFile { path: String, message: String },
        #[display("Failed to read diff from stdin: {message}")]
        ReadStdin { message: String },
    }

    /// Errors producing output
    OutputError := {
        #[display("Failed to serialize JSON: {message}")]
        Json { message: String },
        #[display("Failed to write output: {message}")]
        Write { message: String },
    }
}

#[derive(Parser)]
#[command(name = "diff-outline", version)]
#[command(about = "Summarize a unified diff as per-file counts and a directory tree")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-line summary, e.g. "2 files changed, +10 lines, -3 lines"
    Summary {
        /// Diff file to read; stdin when omitted or "-"
        input: Option<PathBuf>,
    },
    /// Added and removed line counts per file, in diff order
    Files {
        /// Diff file to read; stdin when omitted or "-"
        input: Option<PathBuf>,
    },
    /// Changed files as a directory tree
    Tree {
        /// Diff file to read; stdin when omitted or "-"
        input: Option<PathBuf>,
        /// Directory paths to show collapsed (e.g. "src/diff")
        #[arg(long, value_name = "DIR")]
        collapse: Vec<String>,
    },
    /// Generate shell completions
    Completions { shell: Shell },
    /// Generate a man page
    Man,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Commands::Summary { input } => {
            let summary = DiffSummary::parse(&read_input(input.as_deref())?);
            if cli.json {
                write_json(out, &summary)?;
            } else {
                match summary {
                    Some(summary) => write_text(out, &format!("{summary}\n"))?,
                    None => write_text(out, "No changes\n")?,
                }
            }
        }
        Commands::Files { input } => {
            let files = DiffSummary::parse(&read_input(input.as_deref())?)
                .map(|summary| summary.files)
                .unwrap_or_default();
            if cli.json {
                write_json(out, &files)?;
            } else {
                let mut text = String::new();
                for file in &files {
                    text.push_str(&format!(
                        "+{} -{} {}\n",
                        file.additions, file.deletions, file.filename
                    ));
                }
                write_text(out, &text)?;
            }
        }
        Commands::Tree { input, collapse } => {
            let files = DiffSummary::parse(&read_input(input.as_deref())?)
                .map(|summary| summary.files)
                .unwrap_or_default();
            let mut tree = build_file_tree(&files);
            for path in &collapse {
                if !set_expanded(&mut tree, path, false) {
                    log::warn!("no directory {path:?} to collapse");
                }
            }
            if cli.json {
                write_json(out, &tree)?;
            } else {
                write_text(out, &render_tree(&tree))?;
            }
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "diff-outline", out);
        }
        Commands::Man => {
            clap_mangen::Man::new(Cli::command())
                .render(out)
                .map_err(|e| OutputError::Write {
                    message: e.to_string(),
                })?;
        }
    }

    Ok(())
}

/// Read the whole diff from `path`, or from stdin for `None` and `-`
fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|e| InputError::ReadFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| InputError::ReadStdin {
                    message: e.to_string(),
                })?;
            Ok(text)
        }
    }
}

fn write_text(out: &mut impl Write, text: &str) -> Result<(), OutputError> {
    out.write_all(text.as_bytes())
        .map_err(|e| OutputError::Write {
            message: e.to_string(),
        })
}

fn write_json<T: serde::Serialize>(out: &mut impl Write, value: &T) -> Result<(), OutputError> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| OutputError::Json {
        message: e.to_string(),
    })?;
    json.push('\n');
    write_text(out, &json)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use tempfile::NamedTempFile;

    const DIFF: &str = "\
diff --git a/src/lib.rs b/src/lib.rs
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1 +1,2 @@
-old
+new
+newer
diff --git a/README.md b/README.md
--- a/README.md
+++ b/README.md
@@ -3,0 +4 @@
+docs
";

    fn diff_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn summary_prints_one_line() {
        let file = diff_file(DIFF);
        let path = file.path().to_str().unwrap();

        assert_eq!(
            run_args(&["diff-outline", "summary", path]).unwrap(),
            "2 files changed, +3 lines, -1 lines\n"
        );
    }

    #[test]
    fn summary_of_blank_input() {
        let file = diff_file("  \n");
        let path = file.path().to_str().unwrap();

        assert_eq!(
            run_args(&["diff-outline", "summary", path]).unwrap(),
            "No changes\n"
        );
        assert_eq!(
            run_args(&["diff-outline", "--json", "summary", path]).unwrap(),
            "null\n"
        );
    }

    #[test]
    fn files_in_diff_order() {
        let file = diff_file(DIFF);
        let path = file.path().to_str().unwrap();

        assert_eq!(
            run_args(&["diff-outline", "files", path]).unwrap(),
            "+2 -1 src/lib.rs\n+1 -0 README.md\n"
        );
    }

    #[test]
    fn tree_with_collapsed_directory() {
        let file = diff_file(DIFF);
        let path = file.path().to_str().unwrap();

        assert_eq!(
            run_args(&["diff-outline", "tree", path]).unwrap(),
            "v src/ (1 file)\n    lib.rs +2 -1\n  README.md +1 -0\n"
        );
        assert_eq!(
            run_args(&["diff-outline", "tree", path, "--collapse", "src"]).unwrap(),
            "> src/ (1 file)\n  README.md +1 -0\n"
        );
    }

    #[test]
    fn tree_json_uses_type_tags() {
        let file = diff_file(DIFF);
        let path = file.path().to_str().unwrap();

        let output = run_args(&["diff-outline", "tree", "--json", path]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["type"], "directory");
        assert_eq!(value[0]["fileCount"], 1);
        assert_eq!(value[0]["children"][0]["path"], "src/lib.rs");
        assert_eq!(value[1]["type"], "file");
        assert_eq!(value[1]["additions"], 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = run_args(&["diff-outline", "summary", "/nonexistent/diff.patch"]).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read /nonexistent/diff.patch"));
    }

    #[test]
    fn man_page_renders() {
        let output = run_args(&["diff-outline", "man"]).unwrap();
        assert!(output.contains(".TH"));
    }
}
