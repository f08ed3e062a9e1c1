#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Immutable value objects for the measured quantities found on hardware data sheets: power
//! draw, clock speeds, memory and storage sizes, throughput, core counts, caches, fabrication
//! nodes, memory standards and screen characteristics.
//!
//! Every value object has a canonical human-readable rendering via `Display`. The rendering is
//! a pure function of the fields and is fixed for the lifetime of the value. Scalar quantities
//! additionally convert into their primary numeric field.
//!
//! Tags that come from a fixed vocabulary (storage units, memory generations, cache levels) are
//! closed enums. Parsing an unknown tag is an error rather than an unchecked string.
//!
//! No conversion between scales is performed: `1024KB` and `1MB` are distinct values and no
//! check is made that values are physically plausible.
//!
//! # Example
//!
//! ```
//! use hardware_units::{
//!     CacheSet, CoreCount, MemorySize, Power, ProcessorClock, StorageUnit,
//! };
//!
//! let clock = ProcessorClock::ghz(3.1, 3.4)?;
//! let cores = CoreCount::new(4);
//! let tdp = Power::watts(65);
//! let caches = CacheSet::new(
//!     Some(MemorySize::decimal(384.0, StorageUnit::KB)?),
//!     Some(MemorySize::decimal(2.0, StorageUnit::MB)?),
//!     Some(MemorySize::decimal(8.0, StorageUnit::MB)?),
//! );
//!
//! println!("{clock}, {cores}, {tdp}");
//! print!("{caches}");
//!
//! assert_eq!(clock.to_string(), "3.1 - 3.4 GHz");
//! assert_eq!(u32::from(cores), 4);
//! # Ok::<(), hardware_units::Error>(())
//! ```

mod cache;
mod clock;
mod error;
mod magnitude;
mod memory;
mod scalar;
mod screen;
mod standard;

pub use cache::*;
pub use clock::*;
pub use error::*;
pub use magnitude::*;
pub use memory::*;
pub use scalar::*;
pub use screen::*;
pub use standard::*;
