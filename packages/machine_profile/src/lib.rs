#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Describes a computer as a composition of component profiles and resolves every field and
//! behavior of those profiles through a single machine.
//!
//! There are five component profiles:
//!
//! * [`Processor`], which may refer to an attached [`GraphicsCard`] without owning it.
//! * [`GraphicsCard`].
//! * [`Monitor`].
//! * [`SolidStateStorage`], which carries a writable slot accessed via `write` and `read`.
//! * [`RandomAccessMemory`], which carries a writable slot accessed via `write_memory` and
//!   `read_memory`.
//!
//! Each profile implements [`Profile`], exposing its fields and behaviors by name. A
//! [`Machine`] owns one of each and composes their names into a [`Namespace`], rejecting any
//! name defined by more than one profile.
//!
//! The precedence between profiles is explicit. Arbitrary [`Profile`] implementations can be
//! composed with [`Namespace::compose()`]: a name defined by more than one profile is rejected
//! unless the composition uses [`CollisionPolicy::FirstWins`], in which case the profile listed
//! first owns the name and every losing definition is recorded.
//!
//! The measured quantities themselves come from the `hardware_units` package.
//!
//! # Example
//!
//! ```
//! use machine_profile::catalog;
//!
//! let mut machine = catalog::reference_machine()?;
//!
//! println!("{}", machine.calculate());
//! println!("{}", machine.render());
//! println!("{}", machine.display());
//!
//! println!("{}", machine.read());
//! machine.write("Test!");
//! println!("{}", machine.read());
//!
//! assert_eq!(machine.field("cpu_cores")?.to_string(), "4 cores");
//! assert_eq!(machine.field("monitor_resolution")?.to_string(), "1920x1080");
//! # Ok::<(), machine_profile::Error>(())
//! ```

pub mod catalog;

mod error;
mod graphics;
mod machine;
mod memory;
mod monitor;
mod namespace;
mod processor;
mod profile;
mod slot;
mod storage;
mod value;

pub use error::*;
pub use graphics::{GraphicsCard, GraphicsCardBuilder};
pub use machine::*;
pub use memory::RandomAccessMemory;
pub use monitor::Monitor;
pub use namespace::*;
pub use processor::{Processor, ProcessorBuilder};
pub use profile::Profile;
pub use slot::*;
pub use storage::SolidStateStorage;
pub use value::*;
