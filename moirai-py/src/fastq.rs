#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};

use crate::utils::{extract_gc_bounds, extract_length_bounds, map_seq_err};
use moirai_core::filter::{self, FilterParams};
use moirai_core::seq::read::ReadBatch;

/// Keep the reads of `seqs` (`{id: (bases, quality)}`) that meet every bound.
#[pyfunction]
#[pyo3(signature = (seqs, gc_bounds=None, length_bounds=None, quality_threshold=0.0))]
fn filter_fastq(
    py: Python<'_>,
    seqs: &Bound<'_, PyDict>,
    gc_bounds: Option<&Bound<'_, PyAny>>,
    length_bounds: Option<&Bound<'_, PyAny>>,
    quality_threshold: f64,
) -> PyResult<PyObject> {
    let mut params = FilterParams::new().with_quality_threshold(quality_threshold);
    if let Some(obj) = gc_bounds {
        params = params.with_gc_bounds(extract_gc_bounds(obj)?);
    }
    if let Some(obj) = length_bounds {
        params = params.with_length_bounds(extract_length_bounds(obj)?);
    }

    let mut batch = ReadBatch::with_capacity(seqs.len());
    for (id, entry) in seqs.iter() {
        let id: String = id.extract()?;
        let (bases, quality): (String, String) = entry.extract()?;
        batch.insert(id, bases, quality).map_err(map_seq_err)?;
    }

    let kept = py
        .allow_threads(|| filter::filter_reads(&batch, &params))
        .map_err(map_seq_err)?;

    let out = PyDict::new_bound(py);
    for read in kept.iter() {
        out.set_item(read.id(), (read.bases(), read.quality()))?;
    }
    Ok(out.into_py(py))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(filter_fastq, m)?)?;
    Ok(())
}
