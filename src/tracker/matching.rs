//! Matching utilities for centroid tracking.

use crate::tracker::category::Category;
use crate::tracker::rect::Rect;
use nalgebra::Point2;
use ndarray::Array2;

/// Detection input for the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// Bounding box in TLWH format (x, y, width, height)
    pub bbox: Rect,
    /// Category already normalized to the tracker's closed set
    pub category: Category,
}

impl Detection {
    pub fn new(x: i32, y: i32, width: i32, height: i32, category: Category) -> Self {
        Self {
            bbox: Rect::new(x, y, width, height),
            category,
        }
    }

    pub fn from_rect(bbox: Rect, category: Category) -> Self {
        Self { bbox, category }
    }
}

/// Compute the Euclidean center distance matrix between tracks and detections.
///
/// Rows follow `track_centers`, columns follow `det_centers`. Computed in `f64`
/// so integer centers stay exact across the whole `i32` range.
pub fn center_distance(
    track_centers: &[Point2<f64>],
    det_centers: &[Point2<f64>],
) -> Array2<f64> {
    let mut dists = Array2::zeros((track_centers.len(), det_centers.len()));
    for (i, t) in track_centers.iter().enumerate() {
        for (j, d) in det_centers.iter().enumerate() {
            dists[[i, j]] = nalgebra::distance(t, d);
        }
    }
    dists
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentResult {
    /// `(track_row, detection_col)` pairs, ordered by detection
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Greedy first-fit assignment.
///
/// Detections are visited in column order; each one takes the lowest unclaimed
/// row whose cost is strictly below `thresh`. A row is claimed at most once.
pub fn first_fit_assignment(cost_matrix: &Array2<f64>, thresh: f64) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();

    let mut claimed = vec![false; num_rows];
    let mut matches = vec![];
    let mut unmatched_detections = vec![];

    for col in 0..num_cols {
        let hit = (0..num_rows).find(|&row| !claimed[row] && cost_matrix[[row, col]] < thresh);
        match hit {
            Some(row) => {
                claimed[row] = true;
                matches.push((row, col));
            }
            None => unmatched_detections.push(col),
        }
    }

    let unmatched_tracks = claimed
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| if c { None } else { Some(i) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}

/// Cost given to pairs at or beyond the threshold so the solver never prefers them.
const GATED_COST: f64 = 1e6;

/// Globally optimal assignment over pairs with cost strictly below `thresh`.
///
/// Falls back to [`first_fit_assignment`] if the solver fails.
pub fn linear_assignment(cost_matrix: &Array2<f64>, thresh: f64) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();

    if num_rows == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: vec![],
            unmatched_detections: (0..num_cols).collect(),
        };
    }

    if num_cols == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: (0..num_rows).collect(),
            unmatched_detections: vec![],
        };
    }

    let size = num_rows.max(num_cols);
    let mut padded = lapjv::Matrix::<f64>::from_elem((size, size), GATED_COST);

    for i in 0..num_rows {
        for j in 0..num_cols {
            let cost = cost_matrix[[i, j]];
            if cost < thresh {
                padded[[i, j]] = cost;
            }
        }
    }

    let row_to_col = lapjv::lapjv(&padded).map(|(row_to_col, _)| row_to_col);
    assignment_from_solution(row_to_col, cost_matrix, thresh)
}

/// Turn a solver row-to-column solution into an `AssignmentResult`, keeping
/// only pairs under `thresh`. A failed solve degrades to first-fit so live
/// objects keep their identities.
fn assignment_from_solution<E: std::fmt::Debug>(
    solution: Result<Vec<usize>, E>,
    cost_matrix: &Array2<f64>,
    thresh: f64,
) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();

    let row_to_col = match solution {
        Ok(row_to_col) => row_to_col,
        Err(err) => {
            log::warn!("lapjv failed ({err:?}); falling back to first-fit assignment");
            return first_fit_assignment(cost_matrix, thresh);
        }
    };

    let mut matches = vec![];
    let mut unmatched_tracks = vec![];
    let mut unmatched_detections_mask: Vec<bool> = vec![true; num_cols];

    for (row_idx, &col_idx) in row_to_col.iter().enumerate() {
        if row_idx >= num_rows {
            continue;
        }
        if col_idx < num_cols && cost_matrix[[row_idx, col_idx]] < thresh {
            matches.push((row_idx, col_idx));
            unmatched_detections_mask[col_idx] = false;
        } else {
            unmatched_tracks.push(row_idx);
        }
    }

    matches.sort_by_key(|&(_, col)| col);

    let unmatched_detections: Vec<usize> = unmatched_detections_mask
        .iter()
        .enumerate()
        .filter_map(|(i, &u)| if u { Some(i) } else { None })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}
