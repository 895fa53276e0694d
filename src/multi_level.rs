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
use crate::buffer_length::dwt_buffer_length;
use crate::err::{try_vec, WaveplanError};
use crate::extension_mode::ExtensionMode;

/// Computes the maximum useful level of DWT decomposition.
///
/// Past this depth the approximation is shorter than the filter's support and
/// further levels carry mostly boundary artifacts.
///
/// # Parameters
/// - `input_len`: Length of the input signal.
/// - `filter_len`: Length of the wavelet filter (number of taps).
///
/// # Returns
/// The deepest useful level, or 0 when the signal is too short for even one
/// level or `filter_len <= 1`. This never fails: degenerate inputs simply
/// have no useful level.
#[inline]
pub fn dwt_max_level(input_len: usize, filter_len: usize) -> usize {
    if filter_len <= 1 || input_len < filter_len - 1 {
        return 0;
    }
    (input_len / (filter_len - 1)).ilog2() as usize
}

/// Computes the maximum useful level of SWT decomposition.
///
/// Each SWT level requires an even working length, so the depth is the number
/// of times `input_len` halves evenly.
///
/// # Returns
/// The largest `level` with `2^level` dividing `input_len`; 0 for odd or zero
/// input. This never fails.
#[inline]
pub fn swt_max_level(input_len: usize) -> usize {
    if input_len == 0 {
        return 0;
    }
    input_len.trailing_zeros() as usize
}

/// Per-level coefficient sizing for a multi-level DWT decomposition.
///
/// Walks the levels the same way an executor does, feeding each level's
/// approximation length into the next, and fails up front on any level whose
/// input would fall below the filter length instead of producing a plan an
/// executor would reject mid-flight.
pub struct DecompositionPlan {
    coeff_lens: Vec<usize>,
    input_len: usize,
    filter_len: usize,
    mode: ExtensionMode,
}

impl DecompositionPlan {
    /// Plans a `levels` deep decomposition of `input_len` samples.
    ///
    /// # Parameters
    /// - `input_len`: Length of the input signal, must not be zero.
    /// - `filter_len`: Length of the wavelet filter, must not be zero.
    /// - `mode`: How the signal continues past its edges.
    /// - `levels`: Requested depth, at least 1.
    pub fn new(
        input_len: usize,
        filter_len: usize,
        mode: ExtensionMode,
        levels: usize,
    ) -> Result<Self, WaveplanError> {
        if input_len == 0 {
            return Err(WaveplanError::ZeroSignalLength);
        }
        if filter_len == 0 {
            return Err(WaveplanError::ZeroFilterLength);
        }
        if levels == 0 {
            return Err(WaveplanError::ZeroLevels);
        }

        let mut coeff_lens = try_vec![0usize; levels];
        let mut current_len = input_len;
        for (level, dst) in coeff_lens.iter_mut().enumerate() {
            if current_len < filter_len {
                return Err(WaveplanError::LevelTooDeep(level + 1, current_len));
            }
            let coeff_len = dwt_buffer_length(current_len, filter_len, mode)?;
            *dst = coeff_len;
            // Next level decomposes only the approximation
            current_len = coeff_len;
        }

        Ok(Self {
            coeff_lens,
            input_len,
            filter_len,
            mode,
        })
    }

    /// Number of planned levels, at least 1.
    pub fn levels(&self) -> usize {
        self.coeff_lens.len()
    }

    /// Length of one coefficient vector at `level`, 1-based. Both the
    /// approximation and the detail half of a level share this length.
    pub fn coeff_len(&self, level: usize) -> Option<usize> {
        if level == 0 {
            return None;
        }
        self.coeff_lens.get(level - 1).copied()
    }

    /// Coefficient length per level, level 1 first.
    pub fn coeff_lens(&self) -> &[usize] {
        &self.coeff_lens
    }

    /// Approximation length left after the deepest level.
    pub fn final_approx_len(&self) -> usize {
        self.coeff_lens[self.coeff_lens.len() - 1]
    }

    /// Total coefficient storage of the full decomposition: the deepest
    /// approximation plus the detail vector of every level.
    pub fn total_coeff_len(&self) -> Result<usize, WaveplanError> {
        let mut total = self.final_approx_len();
        for coeff_len in self.coeff_lens.iter() {
            total = total
                .checked_add(*coeff_len)
                .ok_or(WaveplanError::Overflow)?;
        }
        Ok(total)
    }

    pub fn input_len(&self) -> usize {
        self.input_len
    }

    pub fn filter_len(&self) -> usize {
        self.filter_len
    }

    pub fn mode(&self) -> ExtensionMode {
        self.mode
    }
}
