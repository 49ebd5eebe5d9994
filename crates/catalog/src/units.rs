//! Unit constants used when describing devices and workloads.

/// One mebibyte in bytes.
pub const MB: f64 = 1024.0 * 1024.0;
/// One gibibyte in bytes.
pub const GB: f64 = 1024.0 * MB;
/// One tebibyte in bytes.
pub const TB: f64 = 1024.0 * GB;

/// Thousand (for IOPS ratings).
pub const K: f64 = 1e3;
/// Million (for IOPS ratings).
pub const M: f64 = 1e6;

pub const MS: f64 = 1e-3;
pub const US: f64 = 1e-6;
pub const NS: f64 = 1e-9;

/// Render a byte count with the largest binary unit that keeps it >= 1.
///
/// Values below one mebibyte are printed as a bare byte count.
pub fn format_capacity(bytes: f64) -> String {
    if bytes >= TB {
        format!("{} TB", bytes / TB)
    } else if bytes >= GB {
        format!("{} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{} MB", bytes / MB)
    } else {
        format!("{}", bytes)
    }
}
