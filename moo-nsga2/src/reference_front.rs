//! Reference front loading.

use crate::error::{Nsga2Error, Result};
use ndarray::Array1;
use std::fs;
use std::path::Path;

/// Loads a reference Pareto front from a JSON file holding an array of
/// objective vectors, e.g. `[[0.0, 1.0], [0.5, 0.29], ...]`.
///
/// # Errors
///
/// IO failures and malformed JSON are reported with the offending path;
/// a file that parses to an empty array is rejected as
/// `Nsga2Error::EmptyReferenceFront`.
pub fn load_reference_front(path: &Path) -> Result<Vec<Array1<f64>>> {
    let text = fs::read_to_string(path).map_err(|source| Nsga2Error::ReferenceFrontIo {
        path: path.display().to_string(),
        source,
    })?;
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(&text).map_err(|source| Nsga2Error::ReferenceFrontParse {
            path: path.display().to_string(),
            source,
        })?;
    if rows.is_empty() {
        return Err(Nsga2Error::EmptyReferenceFront);
    }
    Ok(rows.into_iter().map(Array1::from_vec).collect())
}
