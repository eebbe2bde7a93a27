use std::io::Write;

use bytescope_core::registry::SourceRegistry;

use super::CommandResult;

pub fn run(source: &str, count: usize, format: &str) -> CommandResult {
    let mut registry = SourceRegistry::standard();
    let bytes = registry.produce(source, count)?;

    match format {
        "raw" => {
            let mut out = std::io::stdout().lock();
            out.write_all(&bytes)?;
            out.flush()?;
        }
        _ => {
            for line in bytes.chunks(16) {
                let hex: Vec<String> = line.iter().map(|b| format!("{b:02x}")).collect();
                println!("{}", hex.join(" "));
            }
        }
    }
    Ok(())
}
