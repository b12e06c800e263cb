#![no_main]

use libfuzzer_sys::fuzz_target;
use matrixgraph_core::{AdjacencyMatrix, WeightMatrix};

fuzz_target!(|data: &[u8]| {
    if let Ok(rows) = serde_json::from_slice::<Vec<Vec<u8>>>(data) {
        let _ = AdjacencyMatrix::from_rows(rows);
    }
    if let Ok(rows) = serde_json::from_slice::<Vec<Vec<u32>>>(data) {
        let _ = WeightMatrix::from_rows(rows);
    }
});
