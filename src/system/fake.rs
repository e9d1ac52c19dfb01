use std::path::Path;

use super::Probe;
use super::snapshot::{CpuInfo, DiskUsage, HostInfo, MemoryInfo, NetworkCounters};
use crate::error::{Category, Error, Result};

/// Scripted probe that records which categories were queried.
pub struct FakeProbe {
    pub calls: Vec<Category>,
    fail_on: Option<Category>,
}

impl FakeProbe {
    pub fn healthy() -> Self {
        Self {
            calls: Vec::new(),
            fail_on: None,
        }
    }

    pub fn failing(category: Category) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some(category),
        }
    }

    fn visit(&mut self, category: Category) -> Result<()> {
        self.calls.push(category);
        if self.fail_on == Some(category) {
            return Err(Error::query(category, "scripted failure"));
        }
        Ok(())
    }
}

impl Probe for FakeProbe {
    fn cpu_info(&mut self) -> Result<Vec<CpuInfo>> {
        self.visit(Category::Cpu)?;
        Ok((0..2)
            .map(|cpu| CpuInfo {
                cpu,
                vendor_id: "GenuineIntel".to_string(),
                model_name: "Test CPU @ 2.40GHz".to_string(),
                cores: 2,
                mhz: 2400.0,
            })
            .collect())
    }

    fn memory_info(&mut self) -> Result<MemoryInfo> {
        self.visit(Category::Memory)?;
        Ok(MemoryInfo::new(1000, 500, 500, 400).with_swap(200, 20))
    }

    fn disk_usage(&mut self, path: &Path) -> Result<DiskUsage> {
        self.visit(Category::Disk)?;
        Ok(DiskUsage::new(path.display().to_string(), "ext4", 4000, 1000))
    }

    fn host_info(&mut self) -> Result<HostInfo> {
        self.visit(Category::Host)?;
        Ok(HostInfo {
            hostname: "testbox".to_string(),
            uptime: 3600,
            boot_time: 1_700_000_000,
            procs: 42,
            os: "linux".to_string(),
            platform: "ubuntu".to_string(),
            platform_family: "debian".to_string(),
            platform_version: "24.04".to_string(),
            kernel_version: "6.8.0".to_string(),
            kernel_arch: "x86_64".to_string(),
        })
    }

    fn net_counters(&mut self) -> Result<Vec<NetworkCounters>> {
        self.visit(Category::Network)?;
        Ok(vec![
            NetworkCounters {
                name: "eth0".to_string(),
                bytes_sent: 1024,
                bytes_recv: 2048,
                packets_sent: 8,
                packets_recv: 16,
                errin: 0,
                errout: 0,
            },
            NetworkCounters {
                name: "lo".to_string(),
                bytes_sent: 64,
                bytes_recv: 64,
                packets_sent: 1,
                packets_recv: 1,
                errin: 0,
                errout: 0,
            },
        ])
    }
}
