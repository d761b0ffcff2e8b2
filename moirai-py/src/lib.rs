use pyo3::prelude::*;

mod fastq;
mod tools;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    tools::register(m)?;
    fastq::register(m)?;
    Ok(())
}
