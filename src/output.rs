// src/output.rs
use crate::path::SamplePath;
use crate::reference::GridComparison;
use std::fs::File;
use std::io::{self, Write};

/// Write one `{time, value}` path to CSV.
pub fn write_path_to_csv(filename: &str, path: &SamplePath) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "time,value")?;
    for (t, x) in path.enumerate_times() {
        writeln!(file, "{:.10},{:.10}", t, x)?;
    }
    Ok(())
}

/// Write a `{time, approximation, reference}` comparison to CSV.
pub fn write_comparison_to_csv(filename: &str, comparison: &GridComparison) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "time,approximation,reference")?;
    for j in 0..comparison.len() {
        writeln!(
            file,
            "{:.10},{:.10},{:.10}",
            comparison.times[j], comparison.approximation[j], comparison.reference[j]
        )?;
    }
    Ok(())
}
