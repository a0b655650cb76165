// src/output.rs
use std::fs::File;
use std::io::{self, Write};

/// Write one `(times, values)` pair as a two-column CSV.
pub fn write_path_to_csv(filename: &str, times: &[f64], values: &[f64]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "t,value")?;
    for (t, v) in times.iter().zip(values.iter()) {
        writeln!(file, "{},{}", t, v)?;
    }
    Ok(())
}

/// Write a batch of paths over a shared grid, one column per run.
pub fn write_paths_to_csv(filename: &str, times: &[f64], paths: &[Vec<f64>]) -> io::Result<()> {
    let mut file = File::create(filename)?;

    let header: Vec<String> = (0..paths.len()).map(|i| format!("run_{}", i)).collect();
    writeln!(file, "t,{}", header.join(","))?;

    for (i, t) in times.iter().enumerate() {
        let row: Vec<String> = paths.iter().map(|p| p[i].to_string()).collect();
        writeln!(file, "{},{}", t, row.join(","))?;
    }
    Ok(())
}
