//! Python bindings for arabtr

use pyo3::prelude::*;

/// Transliterate vocalized Arabic text.
///
/// With `raw=True` the engine output is returned untouched: no input
/// repair, no clean-up passes, no whitespace collapsing.
#[pyfunction]
#[pyo3(signature = (text, raw = false))]
fn transliterate(py: Python<'_>, text: &str, raw: bool) -> String {
    let options = if raw {
        arabtr::TranslitOptions::raw()
    } else {
        arabtr::TranslitOptions::default()
    };
    py.allow_threads(|| arabtr::transliterate_with_options(text, &options))
}

/// Transliterate each line on its own and rejoin them with newlines.
#[pyfunction]
fn transliterate_lines(py: Python<'_>, text: &str) -> String {
    py.allow_threads(|| arabtr::transliterate_lines(text))
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transliterate, m)?)?;
    m.add_function(wrap_pyfunction!(transliterate_lines, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
