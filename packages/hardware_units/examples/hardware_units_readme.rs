//! Example that renders a handful of measurements the way a data sheet would show them.

use hardware_units::{
    CacheSet, CoreCount, FabricationNode, MemorySize, Power, ProcessorClock,
    ProcessorMemoryStandard, StorageUnit, SystemMemoryGeneration,
};

fn main() -> Result<(), hardware_units::Error> {
    println!("=== Hardware Units README Example ===");

    let clock = ProcessorClock::ghz(3.1, 3.4)?;
    let cores = CoreCount::new(4);
    let node = FabricationNode::nanometers(14);
    let tdp = Power::watts(65);
    let memory = ProcessorMemoryStandard::new(SystemMemoryGeneration::Ddr4, 2, 2667);

    let caches = CacheSet::new(
        Some(MemorySize::decimal(384.0, StorageUnit::KB)?),
        Some(MemorySize::decimal(2.0, StorageUnit::MB)?),
        Some(MemorySize::decimal(8.0, StorageUnit::MB)?),
    );

    println!("Clock: {clock}");
    println!("Cores: {cores}");
    println!("Process: {node}");
    println!("TDP: {tdp}");
    println!("Memory: {memory}");
    print!("{caches}");

    let base_clock: f64 = clock.into();
    println!("Base clock as a number: {base_clock}");

    println!("README example completed successfully!");

    Ok(())
}
