//! Linrec CLI report types

use serde::Serialize;

/// Result of `linrec solve`
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub modulus: u64,
    pub index: u64,
    pub value: u64,
}

/// Result of `linrec find`
#[derive(Debug, Clone, Serialize)]
pub struct FindReport {
    pub modulus: u64,
    pub order: usize,
    /// c_1..c_K with s_i = sum c_j s_{i-j}
    pub coefficients: Vec<u64>,
}

/// Result of `linrec extend`
#[derive(Debug, Clone, Serialize)]
pub struct ExtendReport {
    pub modulus: u64,
    pub order: usize,
    pub terms: Vec<u64>,
}

/// Result of `linrec zfunc`
#[derive(Debug, Clone, Serialize)]
pub struct ZReport {
    pub text: String,
    pub z: Vec<usize>,
}

/// Result of `linrec hash`
#[derive(Debug, Clone, Serialize)]
pub struct HashReport {
    pub l: usize,
    pub r: usize,
    pub hash: u64,
}

/// Anything the CLI can print
pub trait Report: Serialize {
    /// Plain-text rendering
    fn render(&self) -> String;
}

impl Report for SolveReport {
    fn render(&self) -> String {
        self.value.to_string()
    }
}

impl Report for FindReport {
    fn render(&self) -> String {
        join(&self.coefficients)
    }
}

impl Report for ExtendReport {
    fn render(&self) -> String {
        join(&self.terms)
    }
}

impl Report for ZReport {
    fn render(&self) -> String {
        join(&self.z)
    }
}

impl Report for HashReport {
    fn render(&self) -> String {
        self.hash.to_string()
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values.iter().map(T::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let report = FindReport { modulus: 7, order: 2, coefficients: vec![1, 1] };
        assert_eq!(report.render(), "1 1");

        let report = SolveReport { modulus: 7, index: 3, value: 2 };
        assert_eq!(report.render(), "2");
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"modulus":7,"index":3,"value":2}"#
        );
    }
}
