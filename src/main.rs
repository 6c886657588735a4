mod codegen;
mod config;
mod frontend;
mod sink;
mod source;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use log::{LevelFilter, debug, warn};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::codegen::{Indent, Translator, c::BASE_DEPTH};
use crate::config::Config;
use crate::frontend::{Lexer, token_dumper::TokenDumper};
use crate::sink::{DEFAULT_OUTPUT, Destination, write_output};
use crate::source::load_source;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_BIN_NAME"),
    about = "Translate a Brainfuck program into C source code",
    rename_all = "kebab-case",
    version = env!("CARGO_PKG_VERSION"),
)]
struct Args {
    /// Brainfuck source file
    input: PathBuf,

    /// Where to write the generated C (defaults to output.c)
    #[arg(long, short = 'o', conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the generated C to standard output instead of a file
    #[arg(long)]
    stdout: bool,

    /// Fail on unbalanced '[' / ']' instead of emitting code that will not compile
    #[arg(long)]
    strict: bool,

    /// Number of tape cells the generated program allocates
    #[arg(long)]
    tape_size: Option<usize>,

    /// Indentation unit: `tab` or a number of spaces
    #[arg(long)]
    indent: Option<Indent>,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the recognized instructions with their positions
    #[arg(long)]
    tokens: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn flag_config(&self) -> Config {
        Config {
            tape_size: self.tape_size,
            indent: self.indent,
            strict: self.strict.then_some(true),
            output: self.output.clone(),
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    debug!("{} version {}", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };
    let color = if args.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();

    if let Err(e) = TermLogger::init(level, log_config, TerminalMode::Stderr, color) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let file_config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = file_config.overridden_by(args.flag_config());
    let options = config.translate_options()?;

    let source = load_source(&args.input)?;

    if args.tokens {
        let mut dumper = TokenDumper::new();
        if args.no_color {
            dumper = dumper.no_color();
        }
        dumper.dump(&Lexer::new(&source).tokenize());
        return Ok(());
    }

    let translation = Translator::new(options)
        .translate(&source)
        .with_context(|| format!("cannot translate '{}'", args.input.display()))?;

    if !translation.is_balanced() {
        warn!(
            "'{}': unbalanced loop delimiters (final depth {}, expected {}); the generated C will not compile",
            args.input.display(),
            translation.final_depth,
            BASE_DEPTH
        );
    }

    let destination = if args.stdout {
        Destination::Stdout
    } else {
        Destination::File(
            config
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        )
    };

    write_output(&translation.code, &destination)
        .with_context(|| format!("cannot write '{}'", destination))?;

    Ok(())
}
