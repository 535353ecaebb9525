use std::process::ExitCode;

use assetlist::error::Error;
use assetlist::store::{self, FsRegistry};
use assetlist::{generate_assetlist, GeneratorConfig};

fn main() -> ExitCode {
    match run() {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<usize, Error> {
    let config = GeneratorConfig::from_env()?;
    let registry = FsRegistry::new(&config.registry_root);
    let zone = store::read_zone(&config.zone_root, &config.chain_id, &config.chain_name)?;

    let (document, report) = generate_assetlist(&config, &registry, &zone);
    let written = store::write_assetlist(&config.zone_root, &config.chain_id, &document)?;

    println!(
        "{}: wrote {} assets to {} ({} failed)",
        report.chain_id,
        report.produced,
        written.display(),
        report.failures.len()
    );
    for failure in &report.failures {
        eprintln!(
            "  skipped {}/{}: {}",
            failure.chain_name, failure.base_denom, failure.error
        );
    }
    Ok(report.failures.len())
}
