//! Ready-made profiles of a reference machine built from real hardware.
//!
//! Each function returns a fresh instance, so machines assembled from the catalog never share
//! state with each other.

use hardware_units::{
    CacheSet, CoreCount, FabricationNode, GraphicsClock, GraphicsMemoryGeneration,
    GraphicsMemoryStandard, MemorySize, Power, ProcessorClock, ProcessorMemoryStandard,
    RefreshRate, Resolution, ScreenDiagonal, StorageUnit, SystemMemoryGeneration, Throughput,
};

use crate::{
    GraphicsCard, Machine, Monitor, Processor, RandomAccessMemory, Result, SolidStateStorage,
};

/// AMD Ryzen 3 1200 desktop processor.
///
/// # Errors
///
/// Fails only if the built-in measurements are invalid, which indicates a bug in this crate.
pub fn ryzen_3_1200() -> Result<Processor> {
    Processor::builder()
        .name("AMD Ryzen™ 3 1200")
        .clock(ProcessorClock::ghz(3.1, 3.4)?)
        .cores(CoreCount::new(4))
        .technology(FabricationNode::nanometers(14))
        .tdp(Power::watts(65))
        .caches(CacheSet::new(
            Some(MemorySize::decimal(384.0, StorageUnit::KB)?),
            Some(MemorySize::decimal(2.0, StorageUnit::MB)?),
            Some(MemorySize::decimal(8.0, StorageUnit::MB)?),
        ))
        .overclockable(true)
        .socket("AM4")
        .memory(ProcessorMemoryStandard::new(
            SystemMemoryGeneration::Ddr4,
            2,
            2667,
        ))
        .build()
}

/// NVIDIA GeForce 8500 GT graphics card.
///
/// # Errors
///
/// Fails only if the built-in measurements are invalid, which indicates a bug in this crate.
pub fn geforce_8500_gt() -> Result<GraphicsCard> {
    GraphicsCard::builder()
        .name("NVIDIA GeForce 8500 GT")
        .clock(GraphicsClock::mhz(459))
        .technology(FabricationNode::nanometers(80))
        .tdp(Power::watts(30))
        .caches(CacheSet::new(
            None,
            Some(MemorySize::decimal(32.0, StorageUnit::KB)?),
            None,
        ))
        .overclockable(true)
        .memory(GraphicsMemoryStandard::new(
            GraphicsMemoryGeneration::Gddr4,
            MemorySize::decimal(256.0, StorageUnit::MB)?,
            128,
            MemorySize::decimal(12.8, StorageUnit::GB)?,
        ))
        .build()
}

/// 21.5 inch Full HD monitor.
///
/// # Errors
///
/// Fails only if the built-in measurements are invalid, which indicates a bug in this crate.
pub fn full_hd_monitor() -> Result<Monitor> {
    Ok(Monitor::new(
        RefreshRate::hertz(60),
        Resolution::new(1920, 1080),
        ScreenDiagonal::inches(21.5)?,
    ))
}

/// Kingston A400 480 GB SATA drive.
///
/// # Errors
///
/// Fails only if the built-in measurements are invalid, which indicates a bug in this crate.
pub fn kingston_a400() -> Result<SolidStateStorage> {
    Ok(SolidStateStorage::new(
        "Kingston A400",
        MemorySize::decimal(480.0, StorageUnit::GB)?,
        "SATA 3.0/2.0",
        Throughput::new(
            MemorySize::whole(500, StorageUnit::MB),
            MemorySize::whole(450, StorageUnit::MB),
        ),
    ))
}

/// 8 GB of system memory.
///
/// # Errors
///
/// Fails only if the built-in measurements are invalid, which indicates a bug in this crate.
pub fn memory_8gb() -> Result<RandomAccessMemory> {
    Ok(RandomAccessMemory::new(MemorySize::decimal(
        8.0,
        StorageUnit::GB,
    )?))
}

/// A machine assembled from every profile in this catalog.
///
/// # Errors
///
/// Fails only if the built-in measurements are invalid or the catalog profiles define
/// colliding names, both of which indicate a bug in this crate.
pub fn reference_machine() -> Result<Machine> {
    Machine::builder()
        .processor(ryzen_3_1200()?)
        .graphics_card(geforce_8500_gt()?)
        .monitor(full_hd_monitor()?)
        .solid_state_storage(kingston_a400()?)
        .random_access_memory(memory_8gb()?)
        .build()
}
