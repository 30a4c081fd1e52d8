use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use sift_lang::cli::{self, CliError, OutputFormat, ParseOptions, ParseResult};
use sift_lang::{OutputParser, ParserConfig, StructuredQueryParser};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sift")]
#[command(about = "Sift - parse LLM-generated metadata filter expressions")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Dsl,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a filter expression and print its tree
    Parse {
        /// The filter expression (reads from stdin if not provided)
        text: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        #[command(flatten)]
        settings: Settings,
    },

    /// Validate filter syntax only
    Check {
        /// The filter expression (reads from stdin if not provided)
        text: Option<String>,

        #[command(flatten)]
        settings: Settings,
    },

    /// Print the format instructions given to the model
    Grammar,
}

#[derive(clap::Args)]
struct Settings {
    /// Maximum call nesting depth (defaults to $SIFT_MAX_DEPTH or 64)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Do not unwrap markdown code fences around the expression
    #[arg(long)]
    keep_fences: bool,
}

impl Settings {
    fn config(&self) -> ParserConfig {
        let mut config = ParserConfig::from_env();
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        if self.keep_fences {
            config = config.with_strip_code_fences(false);
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            text,
            format,
            pretty,
            settings,
        } => run_parse(text, format, pretty, false, &settings),
        Commands::Check { text, settings } => run_parse(text, Format::Json, false, true, &settings),
        Commands::Grammar => {
            println!("{}", StructuredQueryParser::new().format_instructions());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn run_parse(
    text: Option<String>,
    format: Format,
    pretty: bool,
    syntax_only: bool,
    settings: &Settings,
) -> Result<(), CliError> {
    let text = match text {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    let options = ParseOptions {
        text,
        format: match format {
            Format::Json => OutputFormat::Json,
            Format::Dsl => OutputFormat::Dsl,
        },
        pretty,
        syntax_only,
        config: settings.config(),
    };

    match cli::execute_parse(&options)? {
        ParseResult::SyntaxValid => println!("Syntax is valid"),
        ParseResult::Rendered(output) => println!("{}", output),
    }
    Ok(())
}
