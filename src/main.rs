//! Wraith - Main Entry Point
//!
//! Resolves the layered configuration (defaults, global rc file, local rc
//! file, CLI arguments), honors the `--version` and unknown-option
//! short-circuits, and reports the effective settings for the requested
//! script run.

use std::env;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wraith::config::{Settings, CONFIG_FILE_NAME, CONFIG_SECTION};
use wraith::{NAME, VERSION};

/// Initialize the tracing/logging subsystem.
///
/// The flag grammar is fixed, so verbosity is driven by `RUST_LOG`
/// instead of a CLI switch.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn print_usage() {
    println!("Usage: {NAME} [options] <script-file> [script-args ...]");
    println!();
    println!("Options:");
    println!("  --version                     Print version information and exit");
    println!("  --load-images=yes|no          Load inline images (default: yes)");
    println!("  --load-plugins=yes|no         Enable browser plugins (default: no)");
    println!("  --disk-cache=yes|no           Enable the disk cache (default: no)");
    println!("  --ignore-ssl-errors=yes|no    Ignore SSL certificate errors (default: no)");
    println!("  --local-access-remote=yes|no  Allow local content to reach remote URLs (default: no)");
    println!("  --proxy=<host[:port]>         Route page requests through a proxy (default port: 1080)");
    println!("  --cookies=<path>              File for persistent cookie storage");
    println!("  --output-encoding=<name>      Encoding for terminal output (default: UTF-8)");
    println!("  --script-encoding=<name>      Encoding of the script file (default: UTF-8)");
    println!();
    println!("Everything after the script file is passed to the script unchanged.");
    println!(
        "Settings may also be placed in the [{CONFIG_SECTION}] section of \
         ~/{CONFIG_FILE_NAME} or ./{CONFIG_FILE_NAME}."
    );
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Print the effective settings for this run.
fn print_settings(settings: &Settings) {
    println!("Effective configuration:");
    println!("  load images:         {}", yes_no(settings.auto_load_images()));
    println!("  load plugins:        {}", yes_no(settings.plugins_enabled()));
    println!("  disk cache:          {}", yes_no(settings.disk_cache_enabled()));
    println!("  ignore SSL errors:   {}", yes_no(settings.ignore_ssl_errors()));
    println!("  local access remote: {}", yes_no(settings.local_access_remote()));

    if !settings.proxy_host().is_empty() {
        println!(
            "  proxy:               {}:{}",
            settings.proxy_host(),
            settings.proxy_port()
        );
    }
    if !settings.cookie_file().is_empty() {
        println!("  cookies:             {}", settings.cookie_file());
    }

    println!("  output encoding:     {}", settings.output_encoding());
    println!("  script encoding:     {}", settings.script_encoding());
    println!("  script file:         {}", settings.script_file());
    if !settings.script_args().is_empty() {
        println!("  script args:         {}", settings.script_args().join(" "));
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut settings = Settings::new();
    settings.init(&args);
    debug!(?args, "configuration resolved");

    if settings.version_flag() {
        println!("{NAME} {VERSION}");
        return ExitCode::SUCCESS;
    }

    if !settings.unknown_option().is_empty() {
        eprintln!("{}", settings.unknown_option());
        return ExitCode::FAILURE;
    }

    if settings.script_file().is_empty() {
        print_usage();
        return ExitCode::FAILURE;
    }

    print_settings(&settings);
    ExitCode::SUCCESS
}
