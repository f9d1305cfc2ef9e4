//! Engine profiles and where they come from.
//!
//! An [`EngineProfile`] is the immutable `{redline, idle_rpm, curve}` record
//! the simulator runs against. Profiles are looked up by identifier through
//! an [`EngineProvider`], so the simulator never touches storage itself:
//!
//! - [`BuiltinProvider`] - in-memory table, empty by default
//! - [`DirectoryProvider`] - read-only scan of an engine asset folder

mod directory;
mod profile;
mod provider;

pub use directory::{read_descriptor, slugify, DirectoryProvider, CURVE_FILE, META_FILE};
pub use profile::{EngineDescriptor, EngineProfile};
pub use provider::{BuiltinProvider, EngineProvider};

/// Redline used when no engine (or an unknown engine) is selected.
pub const DEFAULT_REDLINE: u32 = 7500;

/// Idle speed used when no engine (or an unknown engine) is selected.
pub const DEFAULT_IDLE_RPM: u32 = 900;
