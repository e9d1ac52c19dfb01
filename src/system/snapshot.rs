use serde::{Deserialize, Serialize};

/// Everything collected during one run.
///
/// Built in a single step by [`collect_snapshot`](super::collector::collect_snapshot)
/// once all five queries have succeeded, then only borrowed by the report
/// and the store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub cpu_info: Vec<CpuInfo>,
    pub mem_info: MemoryInfo,
    pub disk_info: DiskUsage,
    pub host_info: HostInfo,
    pub net_info: Vec<NetworkCounters>,
}

/// One logical core.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    pub cpu: u32,
    pub vendor_id: String,
    pub model_name: String,
    pub cores: u32,
    pub mhz: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub free: u64,
    pub used_percent: f64,
    pub swap_total: u64,
    pub swap_used: u64,
}

impl MemoryInfo {
    pub fn new(total: u64, available: u64, used: u64, free: u64) -> Self {
        Self {
            total,
            available,
            used,
            free,
            used_percent: used_percent(used, total),
            swap_total: 0,
            swap_used: 0,
        }
    }

    pub fn with_swap(mut self, swap_total: u64, swap_used: u64) -> Self {
        self.swap_total = swap_total;
        self.swap_used = swap_used;
        self
    }
}

/// Usage of the filesystem mounted at `path`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskUsage {
    pub path: String,
    pub fstype: String,
    pub total: u64,
    pub free: u64,
    pub used: u64,
    pub used_percent: f64,
}

impl DiskUsage {
    /// `used` is derived as `total - free`.
    pub fn new(
        path: impl Into<String>,
        fstype: impl Into<String>,
        total: u64,
        free: u64,
    ) -> Self {
        let used = total.saturating_sub(free);
        Self {
            path: path.into(),
            fstype: fstype.into(),
            total,
            free,
            used,
            used_percent: used_percent(used, total),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostInfo {
    pub hostname: String,
    /// Seconds since boot.
    pub uptime: u64,
    /// Unix timestamp, seconds.
    pub boot_time: u64,
    pub procs: u64,
    pub os: String,
    pub platform: String,
    pub platform_family: String,
    pub platform_version: String,
    pub kernel_version: String,
    pub kernel_arch: String,
}

/// Cumulative counters of a single interface.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCounters {
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errin: u64,
    pub errout: u64,
}

/// `used / total` as a percentage, `0.0` for an empty total.
pub fn used_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    used as f64 / total as f64 * 100.0
}
