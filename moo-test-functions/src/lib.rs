//! Multi-objective benchmark functions.
//!
//! Standard two-objective test problems (the ZDT family and Schaffer
//! N.1) with a name-based registry, per-function metadata and analytic
//! Pareto front generators for computing quality indicators.

use ndarray::Array1;
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Multi-objective test function type: genome to objective tuple.
pub type MultiObjectiveFunction = fn(&Array1<f64>) -> Array1<f64>;

/// Metadata for a test function including bounds and objective count.
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max) at the typical dimension
    pub bounds: Vec<(f64, f64)>,
    /// Number of objectives
    pub n_objectives: usize,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
    /// Description of the function
    pub description: String,
}

/// Looks up a test function by name.
pub fn get_function(name: &str) -> Option<MultiObjectiveFunction> {
    let f: MultiObjectiveFunction = match name.to_lowercase().as_str() {
        "zdt1" => zdt1,
        "zdt2" => zdt2,
        "zdt3" => zdt3,
        "zdt4" => zdt4,
        "zdt6" => zdt6,
        "schaffer_n1" | "schaffer1" => schaffer_n1,
        _ => return None,
    };
    Some(f)
}

/// Names of all registered test functions, sorted.
pub fn list_functions() -> Vec<String> {
    let mut names: Vec<String> = get_function_metadata().keys().cloned().collect();
    names.sort();
    names
}

/// Get metadata for all available test functions.
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        "zdt1".to_string(),
        FunctionMetadata {
            name: "zdt1".to_string(),
            bounds: vec![(0.0, 1.0); 30],
            n_objectives: 2,
            dimensions: vec![30],
            description: "Convex Pareto front, separable".to_string(),
        },
    );

    metadata.insert(
        "zdt2".to_string(),
        FunctionMetadata {
            name: "zdt2".to_string(),
            bounds: vec![(0.0, 1.0); 30],
            n_objectives: 2,
            dimensions: vec![30],
            description: "Concave Pareto front".to_string(),
        },
    );

    metadata.insert(
        "zdt3".to_string(),
        FunctionMetadata {
            name: "zdt3".to_string(),
            bounds: vec![(0.0, 1.0); 30],
            n_objectives: 2,
            dimensions: vec![30],
            description: "Disconnected Pareto front with five segments".to_string(),
        },
    );

    metadata.insert(
        "zdt4".to_string(),
        FunctionMetadata {
            name: "zdt4".to_string(),
            bounds: {
                let mut b = vec![(0.0, 1.0)];
                b.extend(vec![(-5.0, 5.0); 9]);
                b
            },
            n_objectives: 2,
            dimensions: vec![10],
            description: "Highly multimodal with 21^9 local fronts".to_string(),
        },
    );

    metadata.insert(
        "zdt6".to_string(),
        FunctionMetadata {
            name: "zdt6".to_string(),
            bounds: vec![(0.0, 1.0); 10],
            n_objectives: 2,
            dimensions: vec![10],
            description: "Nonuniform solution density along the front".to_string(),
        },
    );

    metadata.insert(
        "schaffer_n1".to_string(),
        FunctionMetadata {
            name: "schaffer_n1".to_string(),
            bounds: vec![(-10.0, 10.0)],
            n_objectives: 2,
            dimensions: vec![1],
            description: "One-variable convex front between (0,4) and (4,0)".to_string(),
        },
    );

    metadata
}

/// Samples `n` points from the analytic Pareto front of a named
/// function, ordered by the first objective. Returns `None` for an
/// unknown name.
pub fn pareto_front(name: &str, n: usize) -> Option<Vec<Array1<f64>>> {
    if n == 0 {
        return get_function(name).map(|_| Vec::new());
    }
    let steps = |lo: f64, hi: f64| -> Vec<f64> {
        if n == 1 {
            vec![lo]
        } else {
            (0..n)
                .map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64)
                .collect()
        }
    };

    let front: Vec<Array1<f64>> = match name.to_lowercase().as_str() {
        "zdt1" | "zdt4" => steps(0.0, 1.0)
            .into_iter()
            .map(|t| Array1::from_vec(vec![t, 1.0 - t.sqrt()]))
            .collect(),
        "zdt2" => steps(0.0, 1.0)
            .into_iter()
            .map(|t| Array1::from_vec(vec![t, 1.0 - t * t]))
            .collect(),
        "zdt3" => {
            // Dense samples of the trade-off curve, filtered down to the
            // non-dominated segments.
            let candidates: Vec<Array1<f64>> = steps(0.0, 1.0)
                .into_iter()
                .map(|t| {
                    let f2 =
                        1.0 - t.sqrt() - t * (10.0 * std::f64::consts::PI * t).sin();
                    Array1::from_vec(vec![t, f2])
                })
                .collect();
            non_dominated_points(candidates)
        }
        // f1 lower end is the minimum of 1 - exp(-4x) sin^6(6 pi x).
        "zdt6" => steps(0.280775, 1.0)
            .into_iter()
            .map(|t| Array1::from_vec(vec![t, 1.0 - t * t]))
            .collect(),
        "schaffer_n1" | "schaffer1" => steps(0.0, 2.0)
            .into_iter()
            .map(|t| Array1::from_vec(vec![t * t, (t - 2.0) * (t - 2.0)]))
            .collect(),
        _ => return None,
    };
    Some(front)
}

fn non_dominated_points(points: Vec<Array1<f64>>) -> Vec<Array1<f64>> {
    points
        .iter()
        .filter(|p| {
            !points.iter().any(|q| {
                q.iter().zip(p.iter()).all(|(a, b)| a <= b)
                    && q.iter().zip(p.iter()).any(|(a, b)| a < b)
            })
        })
        .cloned()
        .collect()
}
