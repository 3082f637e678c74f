// File: crates/linegraph-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets point reduction for long series.

use crate::types::Point;

/// Largest-Triangle-Three-Buckets downsampling.
/// Returns up to `threshold` points preserving overall shape; first and last are always kept.
pub fn lttb(points: &[Point], threshold: usize) -> Vec<Point> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);

    // index of the point picked from the previous bucket
    let mut a = 0usize;

    for i in 0..(threshold - 2) {
        let start = (1.0 + (i as f64) * bucket_size).floor() as usize;
        let end = (1.0 + ((i + 1) as f64) * bucket_size).floor().min((n - 1) as f64) as usize;

        // average of the next bucket
        let next_end = (1.0 + ((i + 2) as f64) * bucket_size).floor().min(n as f64 - 1.0) as usize;
        let rs = end.max(1);
        let re = next_end.max(rs + 1);
        let next = &points[rs..re.min(n)];
        let avg = if next.is_empty() {
            points[end]
        } else {
            let len = next.len() as f64;
            Point::new(
                next.iter().map(|p| p.x).sum::<f64>() / len,
                next.iter().map(|p| p.y).sum::<f64>() / len,
            )
        };

        // pick the point in this bucket forming the largest triangle with `a` and `avg`
        let pa = points[a];
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for k in start..end.max(start + 1) {
            let p = points[k];
            let area = ((pa.x - p.x) * (avg.y - pa.y) - (pa.x - avg.x) * (p.y - pa.y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(points[max_idx]);
        a = max_idx;
    }

    sampled.push(points[n - 1]);
    sampled
}
