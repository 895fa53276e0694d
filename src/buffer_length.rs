/*
 * // Copyright (c) the Waveplan Developers 08/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::WaveplanError;
use crate::extension_mode::ExtensionMode;

/// Computes the length of the **approximation/detail coefficients** after a single-level
/// discrete wavelet transform (DWT) on a 1D signal.
///
/// Both output halves of a level share this length. Under
/// [`ExtensionMode::Periodization`] the padded tail is folded back into the
/// signal and only `ceil(input_len / 2)` coefficients remain, independent of
/// the filter; every other mode keeps the full convolved extent.
///
/// # Parameters
/// - `input_len`: Length of the input signal, must not be zero.
/// - `filter_len`: Length of the wavelet filter (number of taps), must not be zero.
/// - `mode`: How the signal continues past its edges.
///
/// # Returns
/// The number of coefficients in the resulting approximation or detail vector.
#[inline]
pub fn dwt_buffer_length(
    input_len: usize,
    filter_len: usize,
    mode: ExtensionMode,
) -> Result<usize, WaveplanError> {
    if input_len == 0 {
        return Err(WaveplanError::ZeroSignalLength);
    }
    if filter_len == 0 {
        return Err(WaveplanError::ZeroFilterLength);
    }
    Ok(match mode {
        ExtensionMode::Periodization => input_len.div_ceil(2),
        _ => (input_len + filter_len - 1) / 2,
    })
}

/// Computes the length of a **directly reconstructed signal**: upsampled
/// coefficients convolved with the full filter, no tail trimming.
///
/// Never smaller than [`idwt_buffer_length`] for the same inputs.
///
/// # Parameters
/// - `coeffs_len`: Length of one coefficient vector, must not be zero.
/// - `filter_len`: Length of the wavelet filter (number of taps), must not be zero.
#[inline]
pub fn reconstruction_buffer_length(
    coeffs_len: usize,
    filter_len: usize,
) -> Result<usize, WaveplanError> {
    if coeffs_len == 0 {
        return Err(WaveplanError::ZeroSignalLength);
    }
    if filter_len == 0 {
        return Err(WaveplanError::ZeroFilterLength);
    }
    Ok(2 * coeffs_len + filter_len - 2)
}

/// Computes the length of the **reconstructed signal** from one coefficient
/// vector during the inverse discrete wavelet transform (IDWT).
///
/// Under [`ExtensionMode::Periodization`] the output is exactly
/// `2 * coeffs_len`; every other mode trims the filter transient and yields
/// `2 * coeffs_len - filter_len + 2`. A combination for which that formula
/// has no positive value cannot be reconstructed and is rejected, never
/// clamped.
///
/// # Parameters
/// - `coeffs_len`: Length of one coefficient vector, must not be zero.
/// - `filter_len`: Length of the wavelet filter (number of taps), must not be zero.
/// - `mode`: Extension mode the coefficients were produced under.
#[inline]
pub fn idwt_buffer_length(
    coeffs_len: usize,
    filter_len: usize,
    mode: ExtensionMode,
) -> Result<usize, WaveplanError> {
    if coeffs_len == 0 {
        return Err(WaveplanError::ZeroSignalLength);
    }
    if filter_len == 0 {
        return Err(WaveplanError::ZeroFilterLength);
    }
    if mode == ExtensionMode::Periodization {
        return Ok(2 * coeffs_len);
    }
    match (2 * coeffs_len + 2).checked_sub(filter_len) {
        Some(output_len) if output_len > 0 => Ok(output_len),
        _ => Err(WaveplanError::DegenerateReconstruction(
            coeffs_len, filter_len,
        )),
    }
}

/// Computes the length of the coefficients after a single-level **stationary
/// wavelet transform** (SWT). The SWT never downsamples, so every level keeps
/// the input length.
///
/// # Parameters
/// - `input_len`: Length of the input signal, must not be zero.
#[inline]
pub fn swt_buffer_length(input_len: usize) -> Result<usize, WaveplanError> {
    if input_len == 0 {
        return Err(WaveplanError::ZeroSignalLength);
    }
    Ok(input_len)
}
