/// `count` evenly spaced samples over `[start, end]`.
///
/// Both endpoints are reproduced exactly. A single sample sits at `start`.
/// Samples stay finite even when `end - start` overflows.
#[must_use]
pub fn linspace(start: f64, end: f64, count: u32) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            let step = (end - start) / f64::from(last);
            let mut samples: Vec<f64> = if step.is_finite() {
                (0..count).map(|i| start + f64::from(i) * step).collect()
            } else {
                (0..count)
                    .map(|i| {
                        let t = f64::from(i) / f64::from(last);
                        start * (1.0 - t) + end * t
                    })
                    .collect()
            };

            samples[last as usize] = end;
            samples
        }
    }
}
