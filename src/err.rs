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

#[derive(Clone, Debug)]
pub enum WaveplanError {
    OutOfMemory(usize),
    ZeroSignalLength,
    ZeroFilterLength,
    DegenerateReconstruction(usize, usize),
    ZeroLevels,
    LevelTooDeep(usize, usize),
    UnknownModeName(String),
    EmptyShape,
    ShapeStrideMismatch(usize, usize),
    ZeroAxisExtent(usize),
    ZeroStride(usize),
    AxisOutOfRange(usize, usize),
    Overflow,
}

impl Error for WaveplanError {}

impl std::fmt::Display for WaveplanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WaveplanError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} bytes to vector",))
            }
            WaveplanError::ZeroSignalLength => {
                f.write_str("Signal length must not be zero")
            }
            WaveplanError::ZeroFilterLength => {
                f.write_str("Filter length must not be zero")
            }
            WaveplanError::DegenerateReconstruction(coeffs_len, filter_len) => {
                f.write_fmt(format_args!("Cannot reconstruct any sample from {coeffs_len} coefficients with a {filter_len} taps filter"))
            }
            WaveplanError::ZeroLevels => {
                f.write_str("Decomposition requires at least one level")
            }
            WaveplanError::LevelTooDeep(level, remaining) => {
                f.write_fmt(format_args!("Level {level} has only {remaining} samples left, fewer than the filter length"))
            }
            WaveplanError::UnknownModeName(name) => {
                f.write_fmt(format_args!("Unknown extension mode name '{name}'"))
            }
            WaveplanError::EmptyShape => {
                f.write_str("Array must have at least one dimension")
            }
            WaveplanError::ShapeStrideMismatch(shape_len, strides_len) => {
                f.write_fmt(format_args!("Shape rank {shape_len} does not match strides rank {strides_len}"))
            }
            WaveplanError::ZeroAxisExtent(axis) => {
                f.write_fmt(format_args!("Axis {axis} has zero extent"))
            }
            WaveplanError::ZeroStride(axis) => {
                f.write_fmt(format_args!("Axis {axis} has zero stride but more than one element"))
            }
            WaveplanError::AxisOutOfRange(axis, ndim) => {
                f.write_fmt(format_args!("Axis {axis} is out of range for a {ndim} dimensional array"))
            }
            WaveplanError::Overflow => {
                f.write_str("Overflow is happened")
            }
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::WaveplanError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

use std::error::Error;
use std::fmt::Formatter;
pub(crate) use try_vec;
