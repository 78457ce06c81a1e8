//! arabtr CLI - Vocalized Arabic → Latin transliteration

#[cfg(feature = "cli")]
use arabtr::{
    diagnostics::{check_text, format_diagnostics},
    files::{read_source, read_stdin},
    TranslitError, TranslitOptions, TranslitResult, TranslitWarning, Transliterator,
};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{IsTerminal, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "a2l")]
#[command(version)]
#[command(about = "arabtr - Vocalized Arabic → Latin transliteration", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to transliterate (reads from stdin if no input is given)
    input: Option<String>,

    /// Text to transliterate
    #[arg(short, long, conflicts_with_all = ["input", "file"])]
    text: Option<String>,

    /// Read input from a UTF-8 file
    #[arg(short, long, conflicts_with = "input")]
    file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Check mode - report input issues without transliterating
    #[arg(long)]
    check: bool,

    /// Raw engine output: no input repair, no post-processing
    #[arg(long)]
    raw: bool,

    /// Skip the input repair step
    #[arg(long)]
    no_normalize: bool,

    /// Keep whitespace runs as the engine produced them
    #[arg(long)]
    keep_spaces: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Strict mode: exit with error if the input produced any warning
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show version and scheme info
    Info,
}

#[cfg(feature = "cli")]
impl Cli {
    fn options(&self) -> TranslitOptions {
        if self.raw {
            return TranslitOptions::raw();
        }
        TranslitOptions {
            normalize_input: !self.no_normalize,
            collapse_whitespace: !self.keep_spaces,
            ..TranslitOptions::default()
        }
    }

    fn read_input(&self) -> TranslitResult<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }
        if let Some(ref text) = self.input {
            return Ok(text.clone());
        }
        if let Some(ref path) = self.file {
            return read_source(path);
        }
        if std::io::stdin().is_terminal() {
            return Err(TranslitError::invalid(
                "no input given; pass TEXT, --text, --file or pipe into stdin",
            ));
        }
        read_stdin()
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Commands::Info) = cli.command {
        print_info();
        return;
    }

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Transliterate or check the input; returns the process exit code
#[cfg(feature = "cli")]
fn run(cli: &Cli) -> TranslitResult<i32> {
    let input = cli.read_input()?;
    let use_color = std::io::stderr().is_terminal();

    // If check mode, analyze and report issues
    if cli.check {
        let result = check_text(&input);
        let report = format_diagnostics(&result, std::io::stdout().is_terminal());
        println!("{}", report);
        return Ok(if result.has_errors() { 1 } else { 0 });
    }

    let translator = Transliterator::with_options(cli.options());
    let result = translator.translate_lines(trim_final_newline(&input));
    let warnings = check_text(&input).warnings();

    // Print warnings to stderr (unless quiet mode)
    if !cli.quiet && !warnings.is_empty() {
        print_warnings_to_stderr(&warnings, use_color);
    }

    // Output
    match cli.output {
        Some(ref path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", result)?;
            if warnings.is_empty() {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path,
                    warnings.len()
                );
            }
        }
        None => {
            println!("{}", result);
        }
    }

    // Check strict mode
    if cli.strict && !warnings.is_empty() {
        eprintln!(
            "Error: {} input warning(s) in strict mode",
            warnings.len()
        );
        return Ok(1);
    }

    Ok(0)
}

/// Files and piped input end with a newline that is not a line of its own
#[cfg(feature = "cli")]
fn trim_final_newline(input: &str) -> &str {
    let input = input.strip_suffix('\n').unwrap_or(input);
    input.strip_suffix('\r').unwrap_or(input)
}

#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[TranslitWarning], use_color: bool) {
    let (color, reset) = if use_color {
        ("\x1b[33m", "\x1b[0m")
    } else {
        ("", "")
    };

    eprintln!();
    eprintln!("{}Input Warnings ({}):{}", color, warnings.len(), reset);
    eprintln!();
    for warning in warnings {
        eprintln!("  {}{}{}", color, warning, reset);
    }
    eprintln!();
}

#[cfg(feature = "cli")]
fn print_info() {
    println!("arabtr - Vocalized Arabic → Latin transliteration");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Scheme:");
    println!("  ✓ Definite article with sun-letter assimilation (ash-shams, al-qamar)");
    println!("  ✓ Divine name and its prefixed forms (al-lāh, billāh, lillāh)");
    println!("  ✓ Long vowels ā ī ū, diphthongs aw ay");
    println!("  ✓ Gemination from shadda, tanwin as aⁿ uⁿ iⁿ");
    println!("  ✓ Hamzat wasl elision, hamza as '");
    println!("  ✓ ḥ ṣ ḍ ṭ ẓ, ʿ for ayn");
    println!();
    println!("Input must be vocalized (fatha, damma, kasra, sukun, shadda).");
    println!("Run with --check to see what the transliterator will struggle with.");
    println!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install arabtr --features cli");
    eprintln!("  a2l [OPTIONS] [TEXT]");
}
