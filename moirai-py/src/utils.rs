use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

use moirai_core::error::SeqError;
use moirai_core::filter::Bounds;
use moirai_core::ops::Value;

pub fn map_seq_err(err: SeqError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn value_to_py(py: Python<'_>, value: Value) -> PyObject {
    match value {
        Value::Seq(s) => s.into_py(py),
        Value::Protein(p) => p.to_string().into_py(py),
        Value::GcContent(gc) => gc.into_py(py),
    }
}

/// A number is an upper limit, a 2-tuple an explicit `(low, high)`.
pub fn extract_gc_bounds(obj: &Bound<'_, PyAny>) -> PyResult<Bounds<f64>> {
    if let Ok(pair) = obj.extract::<(f64, f64)>() {
        return Ok(pair.into());
    }
    obj.extract::<f64>()
        .map(Bounds::from)
        .map_err(|_| PyTypeError::new_err("gc_bounds must be a number or a (low, high) tuple"))
}

pub fn extract_length_bounds(obj: &Bound<'_, PyAny>) -> PyResult<Bounds<u64>> {
    if let Ok(pair) = obj.extract::<(u64, u64)>() {
        return Ok(pair.into());
    }
    obj.extract::<u64>().map(Bounds::from).map_err(|_| {
        PyTypeError::new_err("length_bounds must be a non-negative int or a (low, high) tuple")
    })
}
