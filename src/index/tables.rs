//! Published conversion tables for the CRS-R index (Annen, Filippini et al.,
//! 2019; modified score values per Sattin et al., 2015). All values are fixed
//! at 2-decimal precision by the scoring standard.

/// Reflex behavior conversion table: quantized reflex fractions n/7, ordered
/// from the full-reflex row down to zero.
pub const RB_VALUES: [f64; 8] = [1.00, 0.86, 0.71, 0.57, 0.43, 0.29, 0.14, 0.00];

/// Cognitively mediated behavior conversion table: quantized cognitive
/// fractions n/11, ascending.
pub const CMB_VALUES: [f64; 12] = [
    0.00, 0.09, 0.18, 0.27, 0.36, 0.45, 0.55, 0.64, 0.73, 0.82, 0.91, 1.00,
];

/// Base index values, indexed by [reflex row][cognitive column].
pub const MS_MATRIX: [[f64; 12]; 8] = [
    [7.29, 15.63, 23.97, 32.31, 40.64, 48.98, 57.32, 65.65, 73.99, 82.33, 90.66, 99.00],
    [6.25, 14.59, 22.93, 31.26, 39.60, 47.94, 56.27, 64.61, 72.95, 81.28, 89.62, 97.96],
    [5.21, 13.55, 21.88, 30.22, 38.56, 46.89, 55.23, 63.57, 71.91, 80.24, 88.58, 96.92],
    [4.17, 12.51, 20.84, 29.18, 37.52, 45.85, 54.19, 62.53, 70.86, 79.20, 87.54, 95.87],
    [3.13, 11.46, 19.80, 28.14, 36.47, 44.81, 53.15, 61.48, 69.82, 78.16, 86.49, 94.83],
    [2.08, 10.42, 18.76, 27.09, 35.43, 43.77, 52.11, 60.44, 68.78, 77.12, 85.45, 93.79],
    [1.04, 9.38, 17.72, 26.05, 34.39, 42.73, 51.06, 59.40, 67.74, 76.07, 84.41, 92.75],
    [0.00, 8.34, 16.67, 25.01, 33.35, 41.68, 50.02, 58.36, 66.69, 75.03, 83.37, 91.71],
];

/// Round to exactly 2 decimal places, the precision the tables are stated at.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// Table matching is exact at 2 decimals. Comparing integer hundredths avoids
// float-equality drift between a computed fraction and a table literal.
fn cents(x: f64) -> i64 {
    (x * 100.0).round() as i64
}

/// Position of a rounded reflex fraction in [`RB_VALUES`], if it exists.
pub fn reflex_position(fraction: f64) -> Option<usize> {
    RB_VALUES.iter().position(|v| cents(*v) == cents(fraction))
}

/// Position of a rounded cognitive fraction in [`CMB_VALUES`], if it exists.
pub fn cognitive_position(fraction: f64) -> Option<usize> {
    CMB_VALUES.iter().position(|v| cents(*v) == cents(fraction))
}
