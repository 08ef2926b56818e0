use crate::core::boundary::BoundaryPolicy;
use crate::core::forcefield::energy::system_energy;
use crate::core::forcefield::evaluator::HarmonicCosine;
use crate::core::forcefield::term::EnergyTerm;
use crate::core::models::system::ParticleSystem;
use crate::core::random::RngStream;
use crate::core::topology::graph::Topology;
use crate::core::topology::neighbors::NeighborIndex;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::moves::MoveEngine;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sweep::SweepDriver;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Seed the random stream was started from.
    pub seed: u64,
    pub initial_energy: EnergyTerm,
    pub final_energy: EnergyTerm,
    /// Acceptance ratio of every sweep, in order.
    pub acceptance_ratios: Vec<f64>,
    pub system: ParticleSystem,
}

impl SimulationResult {
    pub fn mean_acceptance(&self) -> f64 {
        if self.acceptance_ratios.is_empty() {
            return 0.0;
        }
        self.acceptance_ratios.iter().sum::<f64>() / self.acceptance_ratios.len() as f64
    }
}

#[instrument(skip_all, name = "simulation_workflow")]
pub fn run(
    config: &SimulationConfig,
    reporter: &ProgressReporter,
) -> Result<SimulationResult, EngineError> {
    // === Phase 0: Build topology, neighbor index and initial layout ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let topology = Topology::build(config.topology)?;
    let index = NeighborIndex::build(&topology)?;
    debug!("Topology: {}", topology.summary());

    let boundary = config.boundary;
    let mut system = ParticleSystem::relaxed_layout(
        config.topology,
        config.model.equilibrium_length,
        config.dimension,
        &boundary,
    );

    let engine = MoveEngine::new(
        &index,
        &boundary,
        &HarmonicCosine,
        config.dimension,
        config.model,
    );
    let driver = SweepDriver::new(engine, system.len())?;

    let seed = config.run.seed.unwrap_or_else(rand::random);
    let mut rng = RngStream::seeded(seed);
    info!(
        "Prepared {} ({}, {} boundary, seed {}). Movable ids: {:?}.",
        topology.kind(),
        config.dimension,
        boundary.kind(),
        seed,
        driver.movable_range()
    );
    reporter.report(Progress::PhaseFinish);

    let initial_energy = system_energy(
        system.positions(),
        &topology,
        &HarmonicCosine,
        &boundary,
        &config.model,
    );
    debug!(
        "Initial energy: {:.6} (bond {:.6}, angle {:.6})",
        initial_energy.total(),
        initial_energy.bond,
        initial_energy.angle
    );

    // === Phase 1: Metropolis sweeps ===
    reporter.report(Progress::PhaseStart { name: "Sampling" });
    let num_sweeps = config.run.num_sweeps;
    reporter.report(Progress::TaskStart {
        total_steps: num_sweeps as u64,
    });

    let mut acceptance_ratios = Vec::with_capacity(num_sweeps);
    for sweep in 1..=num_sweeps {
        let ratio = driver.sweep(system.positions_mut(), &mut rng);
        acceptance_ratios.push(ratio);
        reporter.report(Progress::TaskIncrement);

        if sweep % config.run.log_interval == 0 || sweep == num_sweeps {
            info!("Sweep {}/{}: acceptance ratio {:.4}", sweep, num_sweeps, ratio);
        }
    }
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Summarize ===
    let final_energy = system_energy(
        system.positions(),
        &topology,
        &HarmonicCosine,
        &boundary,
        &config.model,
    );
    let result = SimulationResult {
        seed,
        initial_energy,
        final_energy,
        acceptance_ratios,
        system,
    };

    let mean = result.mean_acceptance();
    if mean == 0.0 {
        warn!("No trial move was accepted; the displacement is probably too large.");
    } else if mean == 1.0 {
        warn!("Every trial move was accepted; the displacement is probably too small.");
    }
    reporter.report(Progress::Message(format!(
        "Mean acceptance {:.4}, final energy {:.6}",
        mean,
        final_energy.total()
    )));
    info!(
        "Simulation complete: {} sweeps, mean acceptance {:.4}, energy {:.6} -> {:.6}.",
        num_sweeps,
        mean,
        initial_energy.total(),
        final_energy.total()
    );
    Ok(result)
}
