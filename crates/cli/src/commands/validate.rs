use site_kit_validator::validate_site;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("🔍 Validating site at: {}", path.display());

    let report = validate_site(&path);

    for line in &report.info {
        println!("   {}", line);
    }

    if !report.warnings.is_empty() {
        println!();
        for warning in &report.warnings {
            println!("   ⚠ {}", warning);
        }
    }

    if !report.is_ok() {
        println!();
        for error in &report.errors {
            println!("   ✗ {}", error);
        }
        anyhow::bail!(
            "Validation failed with {} error(s) and {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
    }

    println!();
    println!(
        "✅ Site is valid ({} warning(s))",
        report.warnings.len()
    );

    Ok(())
}
