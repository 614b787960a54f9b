use anyhow::Context;
use dashboard_api::{run_server, AppState};
use std::sync::Arc;
use std::{
    env,
    path::{Path, PathBuf},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Settings file from env (falls back to ./settings.json, then built-in defaults)
    let settings_path = env::var("DASHBOARD_SETTINGS").ok().map(PathBuf::from);
    let mut settings = settings_loader::load_settings_with_fallback(settings_path.as_ref())
        .context("load dashboard settings")?;

    // Environment overrides
    if let Ok(host) = env::var("HOST") {
        settings.host = host;
    }
    if let Ok(port) = env::var("PORT") {
        settings.port = port
            .parse()
            .with_context(|| format!("PORT must be a port number, got '{}'", port))?;
    }

    // Resolve the static directory against the workspace root first, then the crate root
    let crate_root = env::current_dir()?;
    let workspace_root = find_workspace_root().unwrap_or_else(|| crate_root.clone());
    settings.static_dir = settings
        .static_dir
        .take()
        .map(|raw| resolve_with_fallback(&raw, &[&workspace_root, &crate_root]));

    println!("Resource/Requirement Dashboard API");
    println!("==================================");
    println!("Workspace root: {}", workspace_root.display());
    match &settings.static_dir {
        Some(dir) => println!("Static dir (resolved): {}", dir.display()),
        None => println!("Static dir: (none, API only)"),
    }
    println!(
        "Month range: {}..={} months",
        settings.month_range.min_months, settings.month_range.max_months
    );
    println!("Generation markers: {:?}", settings.generation_markers);
    println!("Listening on: {}:{}", settings.host, settings.port);
    println!();

    if let Some(dir) = &settings.static_dir {
        if !dir.exists() {
            eprintln!("[WARN] static directory not found at: {}", dir.display());
            eprintln!("       Continuing; the dashboard page will 404 until it exists.");
        }
    }

    let state = Arc::new(AppState::from_settings(&settings));

    // Start the server
    run_server(state, &settings.host, settings.port).await?;

    Ok(())
}

/// Find the Cargo workspace root by traversing up until a Cargo.toml that contains a [workspace] section.
fn find_workspace_root() -> Option<PathBuf> {
    let mut dir = env::current_dir().ok()?;
    for _ in 0..10 {
        let candidate = dir.join("Cargo.toml");
        if candidate.exists() {
            if let Ok(content) = std::fs::read_to_string(&candidate) {
                if content.contains("[workspace]") {
                    return Some(dir.clone());
                }
            }
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Resolve a path against a list of base directories, returning the first existing match, or the path under the first base.
fn resolve_with_fallback(input: &Path, bases: &[&PathBuf]) -> PathBuf {
    if input.is_absolute() {
        return input.to_path_buf();
    }
    for base in bases {
        let candidate = base.join(input);
        if candidate.exists() {
            return candidate;
        }
    }
    match bases.first() {
        Some(base) => base.join(input),
        None => input.to_path_buf(),
    }
}
