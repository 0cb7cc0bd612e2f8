//! Loader and writer for distance-matrix files.
//!
//! The text format is N·N integers in row-major order separated by any whitespace. A file
//! with a `.json` extension is read as `{"weights": [[...], ...]}` instead.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::matrix::{DistanceMatrix, MatrixRows, Weight};

/// Parse a whitespace-delimited matrix.
///
/// With `cities = Some(n)` exactly `n * n` tokens are required. With `None` the city
/// count is inferred from the token count, which must be a perfect square.
pub fn parse_matrix(text: &str, cities: Option<usize>) -> Result<DistanceMatrix> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let n = match cities {
        Some(n) => n,
        None => infer_cities(tokens.len())?,
    };
    if n == 0 {
        return Err(Error::InvalidDimension(
            "city count must be at least 1".to_string(),
        ));
    }
    let expected = n
        .checked_mul(n)
        .ok_or_else(|| Error::InvalidDimension(format!("{n} cities overflow the matrix size")))?;
    if tokens.len() != expected {
        return Err(Error::InvalidDimension(format!(
            "{n} cities need {expected} weights, found {}",
            tokens.len()
        )));
    }

    let mut weights: Vec<Weight> = Vec::new();
    weights
        .try_reserve_exact(expected)
        .map_err(|_| Error::Allocation {
            what: "distance matrix",
            len: expected,
        })?;

    for (idx, token) in tokens.iter().enumerate() {
        let weight = token.parse::<Weight>().map_err(|_| Error::Malformed {
            row: idx / n + 1,
            column: idx % n + 1,
            reason: format!("expected a non-negative integer, found `{token}`"),
        })?;
        weights.push(weight);
    }

    DistanceMatrix::from_flat(n, weights)
}

fn infer_cities(tokens: usize) -> Result<usize> {
    if tokens == 0 {
        return Err(Error::InvalidDimension("matrix is empty".to_string()));
    }
    let n = (tokens as f64).sqrt().round() as usize;
    if n * n != tokens {
        return Err(Error::InvalidDimension(format!(
            "{tokens} weights do not form a square matrix"
        )));
    }
    Ok(n)
}

/// Read a matrix file, choosing the format from the extension.
pub fn read_matrix(path: &Path, cities: Option<usize>) -> Result<DistanceMatrix> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let reader = BufReader::new(File::open(path)?);
        // Shape is checked after decoding so a ragged matrix stays a dimension error.
        let rows: MatrixRows = serde_json::from_reader(reader)?;
        let matrix = DistanceMatrix::from_rows(rows.weights)?;
        if let Some(n) = cities {
            matrix.expect_cities(n)?;
        }
        Ok(matrix)
    } else {
        let text = std::fs::read_to_string(path)?;
        parse_matrix(&text, cities)
    }
}

/// Render in the text format: one row per line, single spaces between weights.
pub fn format_matrix(matrix: &DistanceMatrix) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(Weight::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

pub fn write_matrix<W: Write>(mut writer: W, matrix: &DistanceMatrix) -> Result<()> {
    writer.write_all(format_matrix(matrix).as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_explicit_count() {
        let m = parse_matrix("0 1 2\n1 0 3\n2 3 0\n", Some(3)).unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.weight(1, 2), 3);
    }

    #[test]
    fn any_whitespace_separates_tokens() {
        let m = parse_matrix("0\t7\n\n  8   0  ", Some(2)).unwrap();
        assert_eq!(m.weight(0, 1), 7);
        assert_eq!(m.weight(1, 0), 8);
    }

    #[test]
    fn infers_city_count() {
        let m = parse_matrix("0 1 2 3 0 4 5 6 0", None).unwrap();
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn non_square_token_count_is_rejected() {
        assert!(matches!(
            parse_matrix("0 1 2", None),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(parse_matrix("  ", None), Err(Error::InvalidDimension(_))));
    }

    #[test]
    fn too_few_or_too_many_tokens() {
        assert!(matches!(
            parse_matrix("0 1 1", Some(2)),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            parse_matrix("0 1 1 0 5", Some(2)),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn zero_cities_rejected() {
        assert!(matches!(parse_matrix("", Some(0)), Err(Error::InvalidDimension(_))));
    }

    #[test]
    fn negative_weight_reports_position() {
        match parse_matrix("0 1 2\n1 0 -3\n2 3 0", Some(3)) {
            Err(Error::Malformed { row, column, .. }) => {
                assert_eq!((row, column), (2, 3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn garbage_token_rejected() {
        assert!(matches!(
            parse_matrix("0 x 1 0", Some(2)),
            Err(Error::Malformed { row: 1, column: 2, .. })
        ));
    }

    #[test]
    fn format_then_parse_is_stable() {
        let m = parse_matrix("0 10 15\n10 0 35\n15 35 0", Some(3)).unwrap();
        let text = format_matrix(&m);
        assert_eq!(text, "0 10 15\n10 0 35\n15 35 0\n");
        assert_eq!(parse_matrix(&text, None).unwrap(), m);
    }
}
