use std::path::Path;

use tracing::{info, warn};

use zonebench::args::GenerateArgs;
use zonebench::error::{AppError, AppResult};
use zonebench::workload::write_workloads;

pub(crate) fn run_generate(args: &GenerateArgs) -> AppResult<()> {
    let clients = args.clients.get();
    let dir = Path::new(&args.output_dir);
    if let Some(seed) = args.seed {
        info!("Generating with seed {}", seed);
    }

    let report = write_workloads(dir, clients, args.lines, args.seed)?;
    info!(
        "Generated {} of {} workload files in {}",
        report.written.len(),
        clients,
        dir.display()
    );

    let failed = report.failures.len();
    match report.failures.into_iter().next() {
        Some(first) => {
            warn!("{} workload file(s) could not be written", failed);
            Err(AppError::workload(first))
        }
        None => Ok(()),
    }
}
