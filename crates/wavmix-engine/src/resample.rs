//! Linear-interpolation sample rate conversion.
//!
//! Operates on a single channel. Stereo sources call [`resample`] once per
//! channel with the same rate pair.

/// Number of output samples produced when converting `input_len` samples.
///
/// `round(input_len * to_rate / from_rate)`, or `input_len` when either rate
/// is zero.
pub fn resampled_len(input_len: usize, from_rate: u32, to_rate: u32) -> usize {
    if from_rate == 0 || to_rate == 0 {
        return input_len;
    }
    (input_len as f64 * to_rate as f64 / from_rate as f64).round() as usize
}

/// Resamples one channel from `from_rate` to `to_rate`.
///
/// Returns the input unchanged when the rates are equal, the input is empty,
/// or either rate is zero. Output sample `i` reads the fractional source
/// position `i * from_rate / to_rate` and interpolates linearly between its
/// two neighbours; positions whose right neighbour is past the end clamp to
/// the last input sample.
///
/// # Arguments
/// * `samples` - One channel at `from_rate`
/// * `from_rate` - Source sample rate in Hz
/// * `to_rate` - Target sample rate in Hz
///
/// # Returns
/// [`resampled_len`] samples at `to_rate`
pub fn resample(samples: Vec<f64>, from_rate: u32, to_rate: u32) -> Vec<f64> {
    if from_rate == to_rate || samples.is_empty() || from_rate == 0 || to_rate == 0 {
        return samples;
    }

    let input_len = samples.len();
    let output_len = resampled_len(input_len, from_rate, to_rate);
    if output_len == 0 {
        return Vec::new();
    }

    let step = from_rate as f64 / to_rate as f64;
    let last = samples[input_len - 1];

    (0..output_len)
        .map(|i| {
            let pos = i as f64 * step;
            let left = pos.floor() as usize;
            let right = left + 1;
            if right >= input_len {
                last
            } else {
                let t = pos - left as f64;
                samples[left] * (1.0 - t) + samples[right] * t
            }
        })
        .collect()
}
