use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shamir_reconstruct::config::{DEFAULT_INPUT_PATH, TERM_DISPLAY_DIGITS};
use shamir_reconstruct::secret::format_decimal;
use shamir_reconstruct::{
    decode_document, reconstruct_with_observer, verify_points, Secret, Term, Verification,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Recover a Shamir-shared secret from a JSON share document")]
struct Cli {
    /// Share document with `keys.k` and one `{ base, value }` object per share.
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Also check the shares beyond the first k against the interpolated polynomial.
    #[arg(long, default_value_t = false)]
    verify: bool,

    /// Log decoded shares as well as the Lagrange terms.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn log_term(term: &Term) {
    info!(
        "term {}: y{} * L{}(0) = {} * {}",
        term.position,
        term.position,
        term.position,
        term.y,
        format_decimal(&term.basis, TERM_DISPLAY_DIGITS)
    );
}

fn secret_line(secret: &Secret) -> String {
    format!("Secret (constant term): {secret}")
}

fn verification_lines(verification: &Verification, share_count: usize) -> Vec<String> {
    if verification.mismatches.is_empty() {
        return vec![format!("All {share_count} shares lie on the recovered polynomial")];
    }
    verification
        .mismatches
        .iter()
        .map(|mismatch| {
            format!(
                "Share {} is inconsistent: expected {}, found {}",
                mismatch.x, mismatch.expected, mismatch.actual
            )
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let document = fs::read_to_string(&cli.input)
        .with_context(|| format!("read share document {}", cli.input.display()))?;
    let shares = decode_document(&document)
        .with_context(|| format!("decode share document {}", cli.input.display()))?;

    info!(
        k = shares.threshold,
        shares = shares.points.len(),
        "using the first {} points to reconstruct the secret",
        shares.threshold
    );

    let mut observer = log_term;
    let secret = reconstruct_with_observer(&shares.points, shares.threshold, &mut observer)
        .context("reconstruct secret")?;

    if let Some(warning) = secret.warning() {
        warn!("{warning}");
    }

    println!("{}", secret_line(&secret));

    if cli.verify {
        let verification =
            verify_points(&shares.points, shares.threshold).context("verify shares")?;
        for line in verification_lines(&verification, shares.points.len()) {
            println!("{line}");
        }
    }

    Ok(())
}
