use bytescope_core::registry::{DEFAULT_REQUEST_BYTES, MAX_REQUEST_BYTES, SourceRegistry};

use super::CommandResult;

pub fn run(host: &str, port: u16, device: &str) -> CommandResult {
    let registry = SourceRegistry::with_device_path(device);
    let base = format!("http://{host}:{port}");
    let n_sources = registry.source_count();

    println!("bytescope server v{}", bytescope_core::VERSION);
    println!("   {base}");
    println!("   {n_sources} byte sources registered ({})", registry.source_ids().join(", "));
    println!();
    println!("   Endpoints:");
    println!("     GET /              API index (try: curl {base})");
    println!("     GET /api/random    Bytes from a source");
    println!("     GET /api/health    Health check");
    println!();
    println!("   Query params for /api/random:");
    println!("     count=N            Bytes to return (default {DEFAULT_REQUEST_BYTES}, clamped to {MAX_REQUEST_BYTES})");
    println!("     source=<id>        urandom | lcg | math");
    println!();
    println!("   Examples:");
    println!("     curl '{base}/api/random?count=5000&source=lcg'");
    println!("     curl '{base}/api/random?count=256&source=urandom'");
    println!();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(bytescope_server::run_server(registry, host, port))?;
    Ok(())
}
