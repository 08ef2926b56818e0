use crate::cli::InspectArgs;
use crate::config::PartialSimulationConfig;
use crate::error::Result;
use bondmc::core::boundary::BoundaryPolicy;
use bondmc::core::topology::graph::Topology;
use bondmc::core::topology::neighbors::NeighborIndex;
use bondmc::engine::error::EngineError;
use bondmc::engine::sweep::movable_range;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let (kind, boundary) = PartialSimulationConfig::from_file(&args.config.config)?
        .resolve_layout(&args.config.set_values)?;

    info!("Building topology for {}", kind);
    let topology = Topology::build(kind).map_err(EngineError::from)?;
    let index = NeighborIndex::build(&topology).map_err(EngineError::from)?;

    let capacity = index.capacity();
    let occupancy = index.max_occupancy();
    println!("Topology:  {}", topology.summary());
    println!("Boundary:  {}", boundary.kind());
    println!(
        "Neighbors: at most {} bond(s) and {} angle(s) per particle (capacity {} / {})",
        occupancy.bonds, occupancy.angles, capacity.bonds, capacity.angles
    );
    match movable_range(topology.num_particles(), boundary.kind()) {
        Ok(range) => println!("Movable:   ids {}..={}", range.start(), range.end()),
        Err(e) => println!("Movable:   none ({})", e),
    }

    Ok(())
}
