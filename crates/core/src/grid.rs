/// Returns `n` evenly spaced values over the closed interval `[start, end]`.
///
/// The first value is exactly `start` and the last is exactly `end`. With
/// `n == 1` the grid is just `[start]`; with `n == 0` it is empty.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        #[allow(clippy::cast_precision_loss)]
                        let offset = i as f64 * step;
                        start + offset
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn includes_both_endpoints() {
        let grid = linspace(0.0, 30.0, 20_000);

        assert_eq!(grid.len(), 20_000);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[19_999], 30.0);
        assert_relative_eq!(grid[1] - grid[0], 30.0 / 19_999.0, epsilon = 1e-15);
    }

    #[test]
    fn is_strictly_increasing() {
        let grid = linspace(-1.0, 1.0, 101);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
        assert_relative_eq!(grid[50], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(2.0, 5.0, 2), vec![2.0, 5.0]);
    }
}
