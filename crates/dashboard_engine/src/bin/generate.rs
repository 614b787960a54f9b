use anyhow::{Context, Result};
use dashboard_engine::report::{generate_report, write_report_json};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let settings = env::args()
        .position(|a| a == "--settings")
        .and_then(|i| env::args().nth(i + 1));
    let input = env::args()
        .position(|a| a == "--input")
        .and_then(|i| env::args().nth(i + 1))
        .unwrap_or("entries.json".to_string());
    let out = env::args()
        .position(|a| a == "--out")
        .and_then(|i| env::args().nth(i + 1))
        .unwrap_or("dashboard/report.json".to_string());

    let settings_path = settings.map(PathBuf::from);
    let input_path = PathBuf::from(&input);
    let out_path = PathBuf::from(&out);

    println!(
        "Generating balance report...\n  settings: {}\n  input   : {}\n  output  : {}",
        settings_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(defaults)".to_string()),
        input_path.display(),
        out_path.display()
    );

    let settings = settings_loader::load_settings_with_fallback(settings_path.as_ref())
        .context("load settings")?;
    let report = generate_report(&input_path, &settings).context("generate report")?;
    write_report_json(&report, &out_path).context("write report.json")?;

    println!(
        "Done. {} month(s) at {}",
        report.data.len(),
        report.generated_at
    );
    Ok(())
}
