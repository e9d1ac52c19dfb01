pub mod collector;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod fake;

use std::path::Path;

use crate::error::Result;
use snapshot::{CpuInfo, DiskUsage, HostInfo, MemoryInfo, NetworkCounters};

/// Source of the five metric categories.
///
/// [`collector::Collector`] queries the OS; tests substitute their own.
pub trait Probe {
    fn cpu_info(&mut self) -> Result<Vec<CpuInfo>>;
    fn memory_info(&mut self) -> Result<MemoryInfo>;
    /// Usage of the filesystem mounted exactly at `path`.
    fn disk_usage(&mut self, path: &Path) -> Result<DiskUsage>;
    fn host_info(&mut self) -> Result<HostInfo>;
    /// Counters per interface, sorted by name.
    fn net_counters(&mut self) -> Result<Vec<NetworkCounters>>;
}
