use crate::cli::RunArgs;
use crate::config::PartialSimulationConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use bondmc::core::boundary::BoundaryPolicy;
use bondmc::engine::progress::ProgressReporter;
use bondmc::workflows;
use tracing::info;

pub fn run(args: RunArgs) -> Result<()> {
    let partial_config = PartialSimulationConfig::from_file(&args.config.config)?;
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Sampling {} ({}, {} boundary) for {} sweep(s)...",
        final_config.topology,
        final_config.dimension,
        final_config.boundary.kind(),
        final_config.run.num_sweeps
    );
    info!("Invoking the core simulation workflow...");
    let result = workflows::simulate::run(&final_config, &reporter)?;

    let last_ratio = result.acceptance_ratios.last().copied().unwrap_or(0.0);
    println!("  Seed:               {}", result.seed);
    println!("  Sweeps:             {}", result.acceptance_ratios.len());
    println!("  Mean acceptance:    {:.4}", result.mean_acceptance());
    println!("  Last acceptance:    {:.4}", last_ratio);
    println!(
        "  Initial energy:     {:.6} (bond {:.6}, angle {:.6})",
        result.initial_energy.total(),
        result.initial_energy.bond,
        result.initial_energy.angle
    );
    println!(
        "  Final energy:       {:.6} (bond {:.6}, angle {:.6})",
        result.final_energy.total(),
        result.final_energy.bond,
        result.final_energy.angle
    );

    Ok(())
}
