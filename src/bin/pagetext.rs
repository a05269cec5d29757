//! Command-line front end: read HTML from a file or stdin, print its text or
//! its links.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rs_pagetext::{encoding, extract_links_from_html, extract_text_bytes, LinkOptions};

#[derive(Parser)]
#[command(name = "pagetext", version, about = "Extract plain text or links from HTML")]
struct Cli {
    /// Log debug events to stderr (overridden by PAGETEXT_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the page as plain text.
    Text {
        /// HTML file to read; stdin when omitted or "-".
        file: Option<PathBuf>,
    },
    /// Print absolute link targets, one per line.
    Links(LinksArgs),
}

#[derive(Args)]
struct LinksArgs {
    /// HTML file to read; stdin when omitted or "-".
    file: Option<PathBuf>,

    /// JSON file with link options; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSS selector for link elements [default: a].
    #[arg(short, long)]
    selector: Option<String>,

    /// Base URL for relative targets.
    #[arg(short, long)]
    base_url: Option<String>,

    /// Attribute holding the target [default: href].
    #[arg(short, long)]
    attribute: Option<String>,

    /// Print a JSON array instead of lines.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pagetext: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("PAGETEXT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // A subscriber may already be set when embedded; logging is best-effort.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();

    match command {
        Command::Text { file } => {
            let bytes = read_input(file.as_deref())?;
            writeln!(stdout, "{}", extract_text_bytes(&bytes))?;
        }
        Command::Links(args) => {
            let options = link_options(&args)?;
            let bytes = read_input(args.file.as_deref())?;
            let links = extract_links_from_html(&encoding::decode_html(&bytes), &options)?;

            if args.json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&links)?)?;
            } else {
                for link in &links {
                    writeln!(stdout, "{link}")?;
                }
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

fn link_options(args: &LinksArgs) -> Result<LinkOptions, Box<dyn std::error::Error>> {
    let base = match &args.config {
        Some(path) => LinkOptions::from_json(&fs::read_to_string(path)?)
            .map_err(|err| format!("{}: {err}", path.display()))?,
        None => LinkOptions::default(),
    };

    Ok(apply_overrides(base, args))
}

/// Flags that were given replace the matching config fields; the rest are kept.
fn apply_overrides(mut options: LinkOptions, args: &LinksArgs) -> LinkOptions {
    if let Some(selector) = &args.selector {
        options = options.with_selector(selector.as_str());
    }
    if let Some(base_url) = &args.base_url {
        options = options.with_base_url(base_url.as_str());
    }
    if let Some(attribute) = &args.attribute {
        options = options.with_attribute(attribute.as_str());
    }
    options
}

fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => fs::read(path),
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links_args(argv: &[&str]) -> LinksArgs {
        let argv = ["pagetext", "links"].iter().chain(argv);
        match Cli::try_parse_from(argv) {
            Ok(Cli { command: Command::Links(args), .. }) => args,
            Ok(_) => panic!("expected the links subcommand"),
            Err(err) => panic!("expected Ok(_), got Err({err})"),
        }
    }

    fn config() -> LinkOptions {
        match LinkOptions::from_json(
            r#"{"selector": "article a", "base_url": "https://config.example/", "attribute": "data-href"}"#,
        ) {
            Ok(opts) => opts,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn flags_override_config_fields() {
        let args = links_args(&["--selector", "img", "--attribute", "src"]);
        let opts = apply_overrides(config(), &args);

        assert_eq!(opts.selector, "img");
        assert_eq!(opts.attribute, "src");
        // not given on the command line
        assert_eq!(opts.base_url, "https://config.example/");
    }

    #[test]
    fn base_url_flag_overrides_config() {
        let args = links_args(&["-b", "https://flag.example/", "page.html"]);
        let opts = apply_overrides(config(), &args);

        assert_eq!(opts.base_url, "https://flag.example/");
        assert_eq!(opts.selector, "article a");
        assert_eq!(opts.attribute, "data-href");
    }

    #[test]
    fn no_flags_keep_config_unchanged() {
        let args = links_args(&[]);
        assert_eq!(apply_overrides(config(), &args), config());
    }

    #[test]
    fn no_config_starts_from_defaults() {
        let args = links_args(&["--selector", "link[rel=alternate]"]);
        match link_options(&args) {
            Ok(opts) => assert_eq!(
                opts,
                LinkOptions::default().with_selector("link[rel=alternate]")
            ),
            Err(err) => panic!("expected Ok(_), got Err({err})"),
        }
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = links_args(&["--config", "/nonexistent/pagetext-options.json"]);
        assert!(link_options(&args).is_err());
    }
}
