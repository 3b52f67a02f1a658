//! Response types for host telemetry
//!
//! Every type here is an immutable, request-scoped value record:
//! constructed fresh inside a single operation call, serialized to the
//! caller, and never cached or mutated.

mod cpu;
mod disk;
mod memory;
mod platform;
mod port;
mod summary;
mod time;

pub use cpu::*;
pub use disk::*;
pub use memory::*;
pub use platform::*;
pub use port::*;
pub use summary::*;
pub use time::*;
