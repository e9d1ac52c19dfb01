use std::path::Path;

use sysinfo::{Disks, Networks, ProcessRefreshKind, ProcessesToUpdate, System, ThreadKind};

use super::Probe;
use super::snapshot::{
    CpuInfo, DiskUsage, HostInfo, MemoryInfo, NetworkCounters, SystemSnapshot,
};
use crate::error::{Category, Error, Result};

/// [`Probe`] backed by `sysinfo`.
pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        Collector { sys: System::new() }
    }

    /// Processes only; userland threads are not listed or counted.
    fn process_count(&mut self) -> u64 {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().without_tasks(),
        );
        self.sys
            .processes()
            .values()
            .filter(|process| process.thread_kind() != Some(ThreadKind::Userland))
            .count() as u64
    }

    fn ensure_supported(category: Category) -> Result<()> {
        if sysinfo::IS_SUPPORTED_SYSTEM {
            Ok(())
        } else {
            Err(Error::query(
                category,
                format!("platform {} is not supported", std::env::consts::OS),
            ))
        }
    }
}

impl Probe for Collector {
    fn cpu_info(&mut self) -> Result<Vec<CpuInfo>> {
        Self::ensure_supported(Category::Cpu)?;
        self.sys.refresh_cpu_all();

        let cpus = self.sys.cpus();
        if cpus.is_empty() {
            return Err(Error::query(Category::Cpu, "no CPUs reported"));
        }

        let cores = System::physical_core_count().unwrap_or(cpus.len()) as u32;
        Ok(cpus
            .iter()
            .enumerate()
            .map(|(index, cpu)| CpuInfo {
                cpu: index as u32,
                vendor_id: cpu.vendor_id().to_string(),
                model_name: cpu.brand().trim().to_string(),
                cores,
                mhz: cpu.frequency() as f64,
            })
            .collect())
    }

    fn memory_info(&mut self) -> Result<MemoryInfo> {
        Self::ensure_supported(Category::Memory)?;
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        if total == 0 {
            return Err(Error::query(
                Category::Memory,
                "total memory reported as zero",
            ));
        }

        Ok(MemoryInfo::new(
            total,
            self.sys.available_memory(),
            self.sys.used_memory(),
            self.sys.free_memory(),
        )
        .with_swap(self.sys.total_swap(), self.sys.used_swap()))
    }

    fn disk_usage(&mut self, path: &Path) -> Result<DiskUsage> {
        Self::ensure_supported(Category::Disk)?;
        let disks = Disks::new_with_refreshed_list();

        let disk = disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == path)
            .ok_or_else(|| {
                Error::query(
                    Category::Disk,
                    format!("no filesystem mounted at {}", path.display()),
                )
            })?;

        Ok(DiskUsage::new(
            path.display().to_string(),
            disk.file_system().to_string_lossy(),
            disk.total_space(),
            disk.available_space(),
        ))
    }

    fn host_info(&mut self) -> Result<HostInfo> {
        Self::ensure_supported(Category::Host)?;
        let hostname = System::host_name()
            .ok_or_else(|| Error::query(Category::Host, "hostname is unavailable"))?;

        let procs = self.process_count();

        let platform = System::distribution_id();
        let platform_family = System::distribution_id_like()
            .into_iter()
            .next()
            .unwrap_or_else(|| platform.clone());

        Ok(HostInfo {
            hostname,
            uptime: System::uptime(),
            boot_time: System::boot_time(),
            procs,
            os: std::env::consts::OS.to_string(),
            platform,
            platform_family,
            platform_version: System::os_version().unwrap_or_default(),
            kernel_version: System::kernel_version().unwrap_or_default(),
            kernel_arch: System::cpu_arch(),
        })
    }

    fn net_counters(&mut self) -> Result<Vec<NetworkCounters>> {
        Self::ensure_supported(Category::Network)?;
        let networks = Networks::new_with_refreshed_list();

        let mut counters: Vec<NetworkCounters> = networks
            .list()
            .iter()
            .map(|(name, data)| NetworkCounters {
                name: name.clone(),
                bytes_sent: data.total_transmitted(),
                bytes_recv: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_recv: data.total_packets_received(),
                errin: data.total_errors_on_received(),
                errout: data.total_errors_on_transmitted(),
            })
            .collect();
        counters.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(counters)
    }
}

/// Runs the five queries in order and assembles the snapshot.
///
/// Stops at the first failing query; no partial snapshot is ever built.
pub fn collect_snapshot<P: Probe + ?Sized>(
    probe: &mut P,
    disk_path: &Path,
) -> Result<SystemSnapshot> {
    let cpu_info = {
        let _span = tracing::debug_span!("collector.cpu").entered();
        let cpus = probe.cpu_info()?;
        tracing::debug!(count = cpus.len(), "collected cpu info");
        cpus
    };

    let mem_info = {
        let _span = tracing::debug_span!("collector.memory").entered();
        let mem = probe.memory_info()?;
        tracing::debug!(total = mem.total, used = mem.used, "collected memory info");
        mem
    };

    let disk_info = {
        let _span =
            tracing::debug_span!("collector.disk", path = %disk_path.display()).entered();
        let disk = probe.disk_usage(disk_path)?;
        tracing::debug!(total = disk.total, free = disk.free, "collected disk info");
        disk
    };

    let host_info = {
        let _span = tracing::debug_span!("collector.host").entered();
        let host = probe.host_info()?;
        tracing::debug!(hostname = %host.hostname, procs = host.procs, "collected host info");
        host
    };

    let net_info = {
        let _span = tracing::debug_span!("collector.network").entered();
        let nets = probe.net_counters()?;
        tracing::debug!(interfaces = nets.len(), "collected network info");
        nets
    };

    Ok(SystemSnapshot {
        cpu_info,
        mem_info,
        disk_info,
        host_info,
        net_info,
    })
}
