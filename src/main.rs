use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use mailmerge::config::{Args, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) parse args (clap prints its own usage on bad input) ──────
    let args = Args::parse();

    if let Err(e) = try_main(args) {
        eprintln!("Error: {:#}", e);
        let _ = Args::command().print_help();
        std::process::exit(1);
    }
    println!("Program finished successfully.");
}

fn try_main(args: Args) -> Result<()> {
    let cfg = Config::try_from(args).context("invalid arguments")?;
    info!(
        csv = %cfg.csv_file.display(),
        out = %cfg.output_dir.display(),
        email = cfg.email_template.is_some(),
        letter = cfg.letter_template.is_some(),
        "startup"
    );

    let report = mailmerge::run(&cfg)?;
    info!(
        emails = report.emails,
        letters = report.letters,
        "all done"
    );
    Ok(())
}
