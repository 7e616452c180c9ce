//! Machine and identity probes. Everything here is best-effort: a failing
//! probe yields a placeholder value, never an error.

use std::fs;
use std::process::Command;

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone)]
pub struct MachineInfo {
    pub make: String,
    pub model: String,
}

impl Default for MachineInfo {
    fn default() -> Self {
        Self {
            make: UNKNOWN.to_string(),
            model: UNKNOWN.to_string(),
        }
    }
}

/// Machine vendor and model strings for the report header.
pub fn machine_info() -> MachineInfo {
    let mut info = MachineInfo::default();

    if cfg!(target_os = "linux") {
        if let Some(make) = read_dmi("sys_vendor") {
            info.make = make;
        }
        if let Some(model) = read_dmi("product_name") {
            info.model = model;
        }
    } else if cfg!(target_os = "macos") {
        info.make = "Apple".to_string();
        if let Some(model) = run_probe("sysctl", &["-n", "hw.model"]) {
            info.model = model;
        }
    } else if cfg!(target_os = "windows") {
        if let Some(make) = wmic_value(&["computersystem", "get", "manufacturer"]) {
            info.make = make;
        }
        if let Some(model) = wmic_value(&["computersystem", "get", "model"]) {
            info.model = model;
        }
    }

    info
}

/// Current OS user, from the environment.
pub fn operator_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Network hostname, from the environment or the `hostname` utility.
pub fn hostname() -> String {
    if let Ok(h) = std::env::var("HOSTNAME").or_else(|_| std::env::var("COMPUTERNAME"))
        && !h.trim().is_empty()
    {
        return h.trim().to_string();
    }

    run_probe("hostname", &[]).unwrap_or_else(|| UNKNOWN.to_string())
}

fn read_dmi(key: &str) -> Option<String> {
    let path = format!("/sys/devices/virtual/dmi/id/{key}");
    let value = fs::read_to_string(path).ok()?;
    non_empty(value)
}

fn run_probe(cmd: &str, args: &[&str]) -> Option<String> {
    let out = Command::new(cmd).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    non_empty(String::from_utf8_lossy(&out.stdout).to_string())
}

/// `wmic <query>` prints a header line followed by the value.
fn wmic_value(args: &[&str]) -> Option<String> {
    let out = Command::new("wmic").args(args).output().ok()?;
    let text = String::from_utf8_lossy(&out.stdout).to_string();
    non_empty(text.lines().nth(1).unwrap_or("").to_string())
}

fn non_empty(s: String) -> Option<String> {
    let t = s.trim().to_string();
    if t.is_empty() { None } else { Some(t) }
}
