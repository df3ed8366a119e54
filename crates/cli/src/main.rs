//! RISC-V capability detection CLI.
//!
//! This binary runs the boot-time detection pass outside the kernel. It provides:
//! 1. **Detect:** Reduce one ISA string per hart (or a JSON platform file) and print the report.
//! 2. **Tokens:** Show how a single ISA string splits into extension tokens.

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rvhwcap_core::feature::report::long_extension_names;
use rvhwcap_core::feature::{HostCapabilities, init_host};
use rvhwcap_core::isa::{Xlen, strip_width_prefix, tokens};
use rvhwcap_core::{Config, Platform};

#[derive(Parser, Debug)]
#[command(
    name = "hwcap",
    author,
    version,
    about = "RISC-V ISA string decoder and capability detection",
    long_about = "Decode RISC-V ISA strings and reduce them across harts into the capabilities \
                  common to every hart.\n\nExamples:\n  hwcap detect --isa rv64imafdc --isa rv64imac\n  \
                  hwcap detect --platform platform.json --xlen rv64\n  hwcap tokens rv64imafdc_zba_svpbmt1p0"
)]
struct Cli {
    /// Log verbosity (-v for debug, -vv for trace). `RUST_LOG` overrides it.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct WidthArg {
    /// Register width whose prefix is stripped (`rv32` or `rv64`). Default: either.
    #[arg(long)]
    xlen: Option<Xlen>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect the capabilities shared by all harts.
    Detect {
        /// ISA string of one hart; repeat once per hart.
        #[arg(short, long = "isa", required_unless_present = "platform")]
        isa: Vec<String>,

        /// JSON platform description (`{"harts": [{"hartid": 0, "isa": "..."}]}`).
        #[arg(short, long, conflicts_with = "isa")]
        platform: Option<String>,

        #[command(flatten)]
        width: WidthArg,
    },

    /// Print the extension tokens of one ISA string.
    Tokens {
        /// ISA string to decode.
        isa: String,

        #[command(flatten)]
        width: WidthArg,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Detect {
            isa,
            platform,
            width,
        } => cmd_detect(isa, platform, width.xlen),
        Commands::Tokens { isa, width } => cmd_tokens(&isa, width.xlen),
    }
}

/// Installs a stderr subscriber; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs detection over the given harts and prints the reduced capabilities.
///
/// Exits with code 1 if the platform file cannot be loaded.
fn cmd_detect(isa: Vec<String>, platform: Option<String>, xlen: Option<Xlen>) {
    let platform = match platform {
        Some(path) => Platform::from_file(&path).unwrap_or_else(|e| {
            eprintln!("[!] {e}");
            process::exit(1);
        }),
        None => Platform::from_isa_strings(isa),
    };
    debug!(harts = platform.harts.len(), "loaded platform");

    // The report goes to stdout below rather than through the log.
    let config = Config { xlen, report: false };
    let caps = init_host(&platform, &config).unwrap_or_else(|e| {
        eprintln!("[!] {e}");
        process::exit(1);
    });
    print_capabilities(caps);
}

fn print_capabilities(caps: &HostCapabilities) {
    println!("{caps}");
    println!("harts: {}", caps.harts);
    println!("base word: {:#010x}", caps.base_word());
    println!("ELF hwcap: {:#010x}", caps.elf_hwcap.bits());
    let long = long_extension_names(&caps.isa);
    if !long.is_empty() {
        println!("extensions: {long}");
    }
    println!("fpu: {}", if caps.fpu_enabled() { "enabled" } else { "disabled" });
}

/// Prints one line per token: name, version and status.
fn cmd_tokens(isa: &str, xlen: Option<Xlen>) {
    let body = strip_width_prefix(isa, xlen);
    for token in tokens(body) {
        let name = String::from_utf8_lossy(token.name);
        let kind = if token.long { "long" } else { "short" };
        let version = token
            .major
            .map_or_else(|| "-".to_string(), |major| format!("{major}.{}", token.minor));
        match token.error {
            Some(e) => println!("{name:<16} {kind:<5} {version:<10} {e}"),
            None => println!("{name:<16} {kind:<5} {version}"),
        }
    }
}
