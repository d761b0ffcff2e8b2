#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyList, PyModule, PyTuple};

use crate::utils::{map_seq_err, value_to_py};
use moirai_core::ops::{self, Options, Output};
use moirai_core::seq::{SeqType, TranslationFrame};

/// `run_dna_rna_tools(*seqs, action, seq_type=None, frame=1)`
///
/// Returns a single value for one sequence, a list otherwise.
#[pyfunction]
#[pyo3(signature = (*seqs_and_action, seq_type=None, frame=1))]
fn run_dna_rna_tools(
    py: Python<'_>,
    seqs_and_action: &Bound<'_, PyTuple>,
    seq_type: Option<&str>,
    frame: i64,
) -> PyResult<PyObject> {
    let n = seqs_and_action.len();
    if n < 2 {
        return Err(PyTypeError::new_err(
            "expected at least one sequence followed by an action name",
        ));
    }
    let action: String = seqs_and_action.get_item(n - 1)?.extract()?;
    let seqs = seqs_and_action
        .get_slice(0, n - 1)
        .extract::<Vec<String>>()
        .map_err(|_| PyTypeError::new_err("sequences must be str"))?;

    let frame = TranslationFrame::try_from(frame).map_err(map_seq_err)?;
    let mut options = Options::new().with_frame(frame);
    if let Some(name) = seq_type {
        options = options.with_seq_type(name.parse::<SeqType>().map_err(map_seq_err)?);
    }

    let out = py
        .allow_threads(|| ops::run_named(&seqs, &action, &options))
        .map_err(map_seq_err)?;

    match out {
        Output::Single(value) => Ok(value_to_py(py, value)),
        Output::Many(values) => {
            let items: Vec<PyObject> = values.into_iter().map(|v| value_to_py(py, v)).collect();
            Ok(PyList::new_bound(py, items).into_py(py))
        }
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(run_dna_rna_tools, m)?)?;
    Ok(())
}
