pub mod table;
pub mod theme;

use std::io::{self, Write};

use crate::format::{format_mhz, format_percent, format_size, truncate_unicode};
use crate::system::snapshot::SystemSnapshot;
use table::TextTable;
use theme::{Palette, write_styled_line};

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub color: bool,
    pub human_bytes: bool,
    pub max_model_width: usize,
    pub palette: Palette,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            color: false,
            human_bytes: false,
            max_model_width: 48,
            palette: Palette::default(),
        }
    }
}

/// Prints every section of the snapshot to `out`.
pub fn render<W: Write>(
    snapshot: &SystemSnapshot,
    out: &mut W,
    options: &ReportOptions,
) -> io::Result<()> {
    let palette = &options.palette;
    writeln!(out)?;
    write_styled_line(out, "System Information", palette.title, options.color)?;

    section(out, "Host Information:", &host_table(snapshot), options)?;
    section(out, "CPU Information:", &cpu_table(snapshot, options), options)?;
    section(out, "Memory Information:", &memory_table(snapshot, options), options)?;
    section(out, "Disk Information:", &disk_table(snapshot, options), options)?;
    section(out, "Network Information:", &network_table(snapshot, options), options)?;

    writeln!(out)?;
    write_styled_line(out, "Build Information:", palette.section, options.color)?;
    write_styled_line(
        out,
        &format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        palette.accent,
        options.color,
    )?;
    out.flush()
}

fn section<W: Write>(
    out: &mut W,
    title: &str,
    table: &TextTable,
    options: &ReportOptions,
) -> io::Result<()> {
    writeln!(out)?;
    write_styled_line(out, title, options.palette.section, options.color)?;
    table.write(out, &options.palette, options.color)
}

pub fn host_table(snapshot: &SystemSnapshot) -> TextTable {
    let host = &snapshot.host_info;
    let mut table = TextTable::new(&["Property", "Value"]);
    let rows = [
        ("Hostname", host.hostname.clone()),
        ("OS", host.os.clone()),
        ("Platform", host.platform.clone()),
        ("Platform Family", host.platform_family.clone()),
        ("Platform Version", host.platform_version.clone()),
        ("Kernel Version", host.kernel_version.clone()),
        ("Kernel Arch", host.kernel_arch.clone()),
        ("Uptime", format!("{} seconds", host.uptime)),
        ("Boot Time", host.boot_time.to_string()),
        ("Procs", host.procs.to_string()),
    ];
    for (property, value) in rows {
        table.push_row(vec![property.to_string(), value]);
    }
    table
}

pub fn cpu_table(snapshot: &SystemSnapshot, options: &ReportOptions) -> TextTable {
    let mut table = TextTable::new(&["CPU", "Model Name", "Cores", "Mhz"]);
    for cpu in &snapshot.cpu_info {
        table.push_row(vec![
            cpu.cpu.to_string(),
            truncate_unicode(&cpu.model_name, options.max_model_width),
            cpu.cores.to_string(),
            format_mhz(cpu.mhz),
        ]);
    }
    table
}

pub fn memory_table(snapshot: &SystemSnapshot, options: &ReportOptions) -> TextTable {
    let mem = &snapshot.mem_info;
    let mut table = TextTable::new(&["Total", "Available", "Used", "Used Percent"]);
    table.push_row(vec![
        format_size(mem.total, options.human_bytes),
        format_size(mem.available, options.human_bytes),
        format_size(mem.used, options.human_bytes),
        format_percent(mem.used_percent),
    ]);
    table
}

pub fn disk_table(snapshot: &SystemSnapshot, options: &ReportOptions) -> TextTable {
    let disk = &snapshot.disk_info;
    let mut table = TextTable::new(&["Path", "Total", "Free", "Used", "Used Percent"]);
    table.push_row(vec![
        disk.path.clone(),
        format_size(disk.total, options.human_bytes),
        format_size(disk.free, options.human_bytes),
        format_size(disk.used, options.human_bytes),
        format_percent(disk.used_percent),
    ]);
    table
}

pub fn network_table(snapshot: &SystemSnapshot, options: &ReportOptions) -> TextTable {
    let mut table = TextTable::new(&[
        "Name",
        "Bytes Sent",
        "Bytes Received",
        "Packets Sent",
        "Packets Received",
    ]);
    for net in &snapshot.net_info {
        table.push_row(vec![
            net.name.clone(),
            format_size(net.bytes_sent, options.human_bytes),
            format_size(net.bytes_recv, options.human_bytes),
            net.packets_sent.to_string(),
            net.packets_recv.to_string(),
        ]);
    }
    table
}
