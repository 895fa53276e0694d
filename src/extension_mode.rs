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
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
/// Declares how a signal continues past its edges
pub enum ExtensionMode {
    /// If a read goes out of bounds the signal is extended with zeros: `000000|abcdefgh|000000`
    #[default]
    ZeroPad,
    /// If a read goes out of bounds the edge sample is replicated: `aaaaaa|abcdefgh|hhhhhh`
    ConstantEdge,
    /// If a read goes out of bounds the signal is mirrored with the edge sample
    /// repeated at the fold: `fedcba|abcdefgh|hgfedcb`
    Symmetric,
    /// If a read goes out of bounds the signal is mirrored without repeating
    /// the edge sample: `gfedcb|abcdefgh|gfedcba`
    Reflect,
    /// If a read goes out of bounds the signal continues with its one-sided
    /// first derivative, `value = edge + distance * (edge - inner neighbour)`
    Smooth,
    /// If a read goes out of bounds the signal wraps around: `cdefgh|abcdefgh|abcdefg`
    Periodic,
    /// Wraps like [`ExtensionMode::Periodic`], and a forward transform keeps
    /// only `ceil(len / 2)` coefficients per half instead of the padded count
    Periodization,
}

impl Display for ExtensionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ExtensionMode {
    /// Canonical lowercase name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            ExtensionMode::ZeroPad => "zero",
            ExtensionMode::ConstantEdge => "constant",
            ExtensionMode::Symmetric => "symmetric",
            ExtensionMode::Reflect => "reflect",
            ExtensionMode::Smooth => "smooth",
            ExtensionMode::Periodic => "periodic",
            ExtensionMode::Periodization => "periodization",
        }
    }

    /// Parses a mode from its name, case-insensitively.
    ///
    /// Accepts every canonical [`name`](ExtensionMode::name) plus the spellings
    /// `"zeropad"`, `"ppd"` (periodic) and `"per"` (periodization).
    pub fn from_name(name: &str) -> Result<Self, WaveplanError> {
        match name.to_ascii_lowercase().as_str() {
            "zero" | "zeropad" => Ok(ExtensionMode::ZeroPad),
            "constant" => Ok(ExtensionMode::ConstantEdge),
            "symmetric" => Ok(ExtensionMode::Symmetric),
            "reflect" => Ok(ExtensionMode::Reflect),
            "smooth" => Ok(ExtensionMode::Smooth),
            "periodic" | "ppd" => Ok(ExtensionMode::Periodic),
            "periodization" | "per" => Ok(ExtensionMode::Periodization),
            _ => Err(WaveplanError::UnknownModeName(name.to_owned())),
        }
    }

    /// Maps `position` onto the extension of a signal holding `len` samples.
    ///
    /// In-range positions always resolve to [`SampleSource::Index`] at the
    /// position itself; out-of-range positions resolve per the mode rule.
    #[inline]
    pub fn resolve(self, position: isize, len: usize) -> Result<SampleSource, WaveplanError> {
        if len == 0 {
            return Err(WaveplanError::ZeroSignalLength);
        }
        Ok(resolve_position(self, position, len))
    }
}

impl FromStr for ExtensionMode {
    type Err = WaveplanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtensionMode::from_name(s)
    }
}

/// Names the signal edge a resolved position lies beyond
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Edge {
    /// Before the first sample
    Leading,
    /// After the last sample
    Trailing,
}

/// Where a resolved sample comes from
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SampleSource {
    /// Read the sample at this in-range index
    Index(usize),
    /// Synthesize a zero sample
    Zero,
    /// Continue the signal past `edge` with its one-sided first derivative,
    /// `distance >= 1` steps beyond the edge sample
    Extrapolate { edge: Edge, distance: usize },
}

#[inline]
fn resolve_position(mode: ExtensionMode, position: isize, len: usize) -> SampleSource {
    let n = len as isize;
    if position >= 0 && position < n {
        return SampleSource::Index(position as usize);
    }
    match mode {
        ExtensionMode::ZeroPad => SampleSource::Zero,
        ExtensionMode::ConstantEdge => {
            if position < 0 {
                SampleSource::Index(0)
            } else {
                SampleSource::Index(len - 1)
            }
        }
        ExtensionMode::Symmetric => {
            let folded = position.rem_euclid(2 * n);
            if folded < n {
                SampleSource::Index(folded as usize)
            } else {
                SampleSource::Index((2 * n - 1 - folded) as usize)
            }
        }
        ExtensionMode::Reflect => {
            // Period would be zero for a single sample
            if len == 1 {
                return SampleSource::Index(0);
            }
            let folded = position.rem_euclid(2 * (n - 1));
            if folded < n {
                SampleSource::Index(folded as usize)
            } else {
                SampleSource::Index((2 * (n - 1) - folded) as usize)
            }
        }
        ExtensionMode::Smooth => {
            // A single sample has no neighbour to take a slope from
            if len == 1 {
                return SampleSource::Index(0);
            }
            if position < 0 {
                SampleSource::Extrapolate {
                    edge: Edge::Leading,
                    distance: position.unsigned_abs(),
                }
            } else {
                SampleSource::Extrapolate {
                    edge: Edge::Trailing,
                    distance: (position - n + 1) as usize,
                }
            }
        }
        ExtensionMode::Periodic | ExtensionMode::Periodization => {
            SampleSource::Index(position.rem_euclid(n) as usize)
        }
    }
}

/// Resolves many positions against one signal extent without revalidating
/// the length on every lookup.
pub struct ExtensionResolver {
    mode: ExtensionMode,
    len: usize,
}

impl ExtensionResolver {
    pub fn new(mode: ExtensionMode, len: usize) -> Result<Self, WaveplanError> {
        if len == 0 {
            return Err(WaveplanError::ZeroSignalLength);
        }
        Ok(Self { mode, len })
    }

    #[inline(always)]
    pub fn resolve(&self, position: isize) -> SampleSource {
        resolve_position(self.mode, position, self.len)
    }

    pub fn mode(&self) -> ExtensionMode {
        self.mode
    }

    pub fn signal_len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(mode: ExtensionMode, len: usize, positions: std::ops::Range<isize>) -> Vec<usize> {
        positions
            .map(|position| match mode.resolve(position, len).unwrap() {
                SampleSource::Index(index) => index,
                other => panic!("expected an index for {mode} at {position}, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_symmetric_extension() {
        // Signal 1 2 3 extends as 2 3 3 2 1 | 1 2 3 | 3 2 1 1 2
        assert_eq!(
            indices(ExtensionMode::Symmetric, 3, -5..8),
            vec![1, 2, 2, 1, 0, 0, 1, 2, 2, 1, 0, 0, 1]
        );
        assert_eq!(
            ExtensionMode::Symmetric.resolve(-1, 3).unwrap(),
            SampleSource::Index(0)
        );
        assert_eq!(
            ExtensionMode::Symmetric.resolve(3, 3).unwrap(),
            SampleSource::Index(2)
        );
        assert_eq!(
            ExtensionMode::Symmetric.resolve(-4, 3).unwrap(),
            SampleSource::Index(2)
        );
    }

    #[test]
    fn test_reflect_extension() {
        // Signal 1 2 3 extends as 1 2 3 2 | 1 2 3 | 2 1 2 3
        assert_eq!(
            indices(ExtensionMode::Reflect, 3, -4..7),
            vec![0, 1, 2, 1, 0, 1, 2, 1, 0, 1, 2]
        );
        assert_eq!(
            ExtensionMode::Reflect.resolve(-1, 3).unwrap(),
            SampleSource::Index(1)
        );
        assert_eq!(
            ExtensionMode::Reflect.resolve(3, 3).unwrap(),
            SampleSource::Index(1)
        );
    }

    #[test]
    fn test_constant_edge_clamps() {
        assert_eq!(
            ExtensionMode::ConstantEdge.resolve(-17, 5).unwrap(),
            SampleSource::Index(0)
        );
        assert_eq!(
            ExtensionMode::ConstantEdge.resolve(5, 5).unwrap(),
            SampleSource::Index(4)
        );
        assert_eq!(
            ExtensionMode::ConstantEdge.resolve(2, 5).unwrap(),
            SampleSource::Index(2)
        );
    }

    #[test]
    fn test_zero_pad() {
        assert_eq!(
            ExtensionMode::ZeroPad.resolve(-1, 4).unwrap(),
            SampleSource::Zero
        );
        assert_eq!(
            ExtensionMode::ZeroPad.resolve(4, 4).unwrap(),
            SampleSource::Zero
        );
        assert_eq!(
            ExtensionMode::ZeroPad.resolve(0, 4).unwrap(),
            SampleSource::Index(0)
        );
    }

    #[test]
    fn test_periodic_wraps() {
        assert_eq!(
            ExtensionMode::Periodic.resolve(-1, 4).unwrap(),
            SampleSource::Index(3)
        );
        assert_eq!(
            ExtensionMode::Periodic.resolve(4, 4).unwrap(),
            SampleSource::Index(0)
        );
        assert_eq!(
            ExtensionMode::Periodic.resolve(-9, 4).unwrap(),
            SampleSource::Index(3)
        );
        for position in -12..12 {
            assert_eq!(
                ExtensionMode::Periodization.resolve(position, 4).unwrap(),
                ExtensionMode::Periodic.resolve(position, 4).unwrap()
            );
        }
    }

    #[test]
    fn test_smooth_extrapolates() {
        assert_eq!(
            ExtensionMode::Smooth.resolve(-1, 6).unwrap(),
            SampleSource::Extrapolate {
                edge: Edge::Leading,
                distance: 1
            }
        );
        assert_eq!(
            ExtensionMode::Smooth.resolve(-3, 6).unwrap(),
            SampleSource::Extrapolate {
                edge: Edge::Leading,
                distance: 3
            }
        );
        assert_eq!(
            ExtensionMode::Smooth.resolve(6, 6).unwrap(),
            SampleSource::Extrapolate {
                edge: Edge::Trailing,
                distance: 1
            }
        );
        assert_eq!(
            ExtensionMode::Smooth.resolve(10, 6).unwrap(),
            SampleSource::Extrapolate {
                edge: Edge::Trailing,
                distance: 5
            }
        );
    }

    #[test]
    fn test_single_sample_signals() {
        let modes = [
            ExtensionMode::ConstantEdge,
            ExtensionMode::Symmetric,
            ExtensionMode::Reflect,
            ExtensionMode::Smooth,
            ExtensionMode::Periodic,
            ExtensionMode::Periodization,
        ];
        for mode in modes {
            for position in [-5isize, -1, 1, 9] {
                assert_eq!(
                    mode.resolve(position, 1).unwrap(),
                    SampleSource::Index(0),
                    "mode {mode} at {position}"
                );
            }
        }
        assert_eq!(
            ExtensionMode::ZeroPad.resolve(-5, 1).unwrap(),
            SampleSource::Zero
        );
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            ExtensionMode::Symmetric.resolve(0, 0),
            Err(WaveplanError::ZeroSignalLength)
        ));
        assert!(matches!(
            ExtensionResolver::new(ExtensionMode::Periodic, 0),
            Err(WaveplanError::ZeroSignalLength)
        ));
    }

    #[test]
    fn test_resolver_matches_one_shot() {
        let modes = [
            ExtensionMode::ZeroPad,
            ExtensionMode::ConstantEdge,
            ExtensionMode::Symmetric,
            ExtensionMode::Reflect,
            ExtensionMode::Smooth,
            ExtensionMode::Periodic,
            ExtensionMode::Periodization,
        ];
        for mode in modes {
            let resolver = ExtensionResolver::new(mode, 7).unwrap();
            assert_eq!(resolver.mode(), mode);
            assert_eq!(resolver.signal_len(), 7);
            for position in -20..20 {
                assert_eq!(
                    resolver.resolve(position),
                    mode.resolve(position, 7).unwrap(),
                    "mode {mode} at {position}"
                );
            }
        }
    }

    #[test]
    fn test_mode_names() {
        let modes = [
            ExtensionMode::ZeroPad,
            ExtensionMode::ConstantEdge,
            ExtensionMode::Symmetric,
            ExtensionMode::Reflect,
            ExtensionMode::Smooth,
            ExtensionMode::Periodic,
            ExtensionMode::Periodization,
        ];
        for mode in modes {
            assert_eq!(ExtensionMode::from_name(mode.name()).unwrap(), mode);
            assert_eq!(mode.to_string(), mode.name());
        }
        assert_eq!(
            ExtensionMode::from_name("zeropad").unwrap(),
            ExtensionMode::ZeroPad
        );
        assert_eq!(
            ExtensionMode::from_name("per").unwrap(),
            ExtensionMode::Periodization
        );
        assert_eq!(
            ExtensionMode::from_name("ppd").unwrap(),
            ExtensionMode::Periodic
        );
        assert_eq!(
            ExtensionMode::from_name("Symmetric").unwrap(),
            ExtensionMode::Symmetric
        );
        assert_eq!(
            "reflect".parse::<ExtensionMode>().unwrap(),
            ExtensionMode::Reflect
        );
        assert!(matches!(
            ExtensionMode::from_name("mirror"),
            Err(WaveplanError::UnknownModeName(_))
        ));
        assert_eq!(ExtensionMode::default(), ExtensionMode::ZeroPad);
    }
}
