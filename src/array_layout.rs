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
use crate::err::{try_vec, WaveplanError};

/// Borrowed shape and strides of a caller-owned n-dimensional buffer.
///
/// Strides are signed element offsets, never bytes; a negative stride walks
/// an axis backwards. The layout only interprets the description, it never
/// owns, allocates or frees the data it describes, and it is immutable after
/// construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArrayLayout<'a> {
    shape: &'a [usize],
    strides: &'a [isize],
}

impl<'a> ArrayLayout<'a> {
    /// Validates a shape/strides pair: equal rank, at least one dimension,
    /// no zero extent, and no zero stride on an axis with more than one
    /// element.
    pub fn new(shape: &'a [usize], strides: &'a [isize]) -> Result<Self, WaveplanError> {
        if shape.len() != strides.len() {
            return Err(WaveplanError::ShapeStrideMismatch(
                shape.len(),
                strides.len(),
            ));
        }
        if shape.is_empty() {
            return Err(WaveplanError::EmptyShape);
        }
        for (axis, (len, stride)) in shape.iter().zip(strides.iter()).enumerate() {
            if *len == 0 {
                return Err(WaveplanError::ZeroAxisExtent(axis));
            }
            if *stride == 0 && *len > 1 {
                return Err(WaveplanError::ZeroStride(axis));
            }
        }
        Ok(Self { shape, strides })
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn shape(&self) -> &'a [usize] {
        self.shape
    }

    pub fn strides(&self) -> &'a [isize] {
        self.strides
    }

    /// Extent of `axis`, rejected when the axis is out of range.
    pub fn axis_len(&self, axis: usize) -> Result<usize, WaveplanError> {
        self.shape
            .get(axis)
            .copied()
            .ok_or(WaveplanError::AxisOutOfRange(axis, self.ndim()))
    }

    /// Element stride of `axis`, rejected when the axis is out of range.
    pub fn stride(&self, axis: usize) -> Result<isize, WaveplanError> {
        self.strides
            .get(axis)
            .copied()
            .ok_or(WaveplanError::AxisOutOfRange(axis, self.ndim()))
    }

    /// Total number of elements the layout addresses.
    pub fn num_elements(&self) -> Result<usize, WaveplanError> {
        let mut count = 1usize;
        for len in self.shape.iter() {
            count = count.checked_mul(*len).ok_or(WaveplanError::Overflow)?;
        }
        Ok(count)
    }

    /// Whether the layout is dense row-major: the last axis has stride 1 and
    /// each axis steps over the full extent of the axes after it. Axes with a
    /// single element place no constraint.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = 1isize;
        for (len, stride) in self.shape.iter().rev().zip(self.strides.iter().rev()) {
            if *len == 1 {
                continue;
            }
            if *stride != expected {
                return false;
            }
            expected = match isize::try_from(*len).ok().and_then(|l| expected.checked_mul(l)) {
                Some(next) => next,
                None => return false,
            };
        }
        true
    }

    /// Number of 1-D lanes running along `axis`: the product of every other
    /// extent.
    pub fn lane_count(&self, axis: usize) -> Result<usize, WaveplanError> {
        if axis >= self.ndim() {
            return Err(WaveplanError::AxisOutOfRange(axis, self.ndim()));
        }
        let mut count = 1usize;
        for (other_axis, len) in self.shape.iter().enumerate() {
            if other_axis == axis {
                continue;
            }
            count = count.checked_mul(*len).ok_or(WaveplanError::Overflow)?;
        }
        Ok(count)
    }

    /// Iterates the base element offset of every 1-D lane along `axis`,
    /// odometer-ordered over the remaining axes with the last one fastest.
    ///
    /// A transform walks one lane by stepping [`stride`](ArrayLayout::stride)
    /// elements from a base offset, [`axis_len`](ArrayLayout::axis_len)
    /// times.
    pub fn lanes(&self, axis: usize) -> Result<AxisLanes<'a>, WaveplanError> {
        let remaining = self.lane_count(axis)?;
        let counters = try_vec![0usize; self.ndim()];
        Ok(AxisLanes {
            shape: self.shape,
            strides: self.strides,
            axis,
            counters,
            offset: 0,
            remaining,
        })
    }
}

/// Iterator over the base offsets of every 1-D lane along one axis.
#[derive(Debug, Clone)]
pub struct AxisLanes<'a> {
    shape: &'a [usize],
    strides: &'a [isize],
    axis: usize,
    counters: Vec<usize>,
    offset: isize,
    remaining: usize,
}

impl AxisLanes<'_> {
    /// Extent of the lane axis.
    pub fn lane_len(&self) -> usize {
        self.shape[self.axis]
    }

    /// Element stride of the lane axis.
    pub fn lane_stride(&self) -> isize {
        self.strides[self.axis]
    }
}

impl Iterator for AxisLanes<'_> {
    type Item = isize;

    fn next(&mut self) -> Option<isize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.offset;
        self.remaining -= 1;
        if self.remaining != 0 {
            for axis in (0..self.shape.len()).rev() {
                if axis == self.axis {
                    continue;
                }
                self.counters[axis] += 1;
                self.offset += self.strides[axis];
                if self.counters[axis] < self.shape[axis] {
                    break;
                }
                self.offset -= self.strides[axis] * self.shape[axis] as isize;
                self.counters[axis] = 0;
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AxisLanes<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(ArrayLayout::new(&[2, 3], &[3, 1]).is_ok());
        assert!(matches!(
            ArrayLayout::new(&[2, 3], &[3]),
            Err(WaveplanError::ShapeStrideMismatch(2, 1))
        ));
        assert!(matches!(
            ArrayLayout::new(&[], &[]),
            Err(WaveplanError::EmptyShape)
        ));
        assert!(matches!(
            ArrayLayout::new(&[2, 0], &[3, 1]),
            Err(WaveplanError::ZeroAxisExtent(1))
        ));
        assert!(matches!(
            ArrayLayout::new(&[2, 3], &[0, 1]),
            Err(WaveplanError::ZeroStride(0))
        ));
        // A single-element axis may carry any stride, zero included
        assert!(ArrayLayout::new(&[1, 3], &[0, 1]).is_ok());
    }

    #[test]
    fn test_accessors() {
        let shape = [2usize, 3, 4];
        let strides = [12isize, 4, 1];
        let layout = ArrayLayout::new(&shape, &strides).unwrap();
        assert_eq!(layout.ndim(), 3);
        assert_eq!(layout.shape(), &shape);
        assert_eq!(layout.strides(), &strides);
        assert_eq!(layout.axis_len(1).unwrap(), 3);
        assert_eq!(layout.stride(2).unwrap(), 1);
        assert_eq!(layout.num_elements().unwrap(), 24);
        assert!(matches!(
            layout.axis_len(3),
            Err(WaveplanError::AxisOutOfRange(3, 3))
        ));
        assert!(matches!(
            layout.stride(7),
            Err(WaveplanError::AxisOutOfRange(7, 3))
        ));
    }

    #[test]
    fn test_contiguity() {
        assert!(ArrayLayout::new(&[2, 3, 4], &[12, 4, 1])
            .unwrap()
            .is_contiguous());
        // Transposed
        assert!(!ArrayLayout::new(&[3, 2], &[1, 3]).unwrap().is_contiguous());
        // Sliced with a gap
        assert!(!ArrayLayout::new(&[2, 3], &[8, 1]).unwrap().is_contiguous());
        // Reversed axis
        assert!(!ArrayLayout::new(&[6], &[-1]).unwrap().is_contiguous());
        // Single-element axes do not constrain
        assert!(ArrayLayout::new(&[1, 4], &[17, 1]).unwrap().is_contiguous());
        assert!(ArrayLayout::new(&[1], &[0]).unwrap().is_contiguous());
    }

    #[test]
    fn test_lane_offsets_row_major() {
        let shape = [2usize, 3, 4];
        let strides = [12isize, 4, 1];
        let layout = ArrayLayout::new(&shape, &strides).unwrap();

        let last: Vec<isize> = layout.lanes(2).unwrap().collect();
        assert_eq!(last, vec![0, 4, 8, 12, 16, 20]);

        let middle: Vec<isize> = layout.lanes(1).unwrap().collect();
        assert_eq!(middle, vec![0, 1, 2, 3, 12, 13, 14, 15]);

        let first: Vec<isize> = layout.lanes(0).unwrap().collect();
        assert_eq!(first, (0..12).collect::<Vec<isize>>());
    }

    #[test]
    fn test_lane_counts() {
        let shape = [2usize, 3, 4];
        let strides = [12isize, 4, 1];
        let layout = ArrayLayout::new(&shape, &strides).unwrap();
        for axis in 0..3 {
            let lanes = layout.lanes(axis).unwrap();
            assert_eq!(lanes.len(), layout.lane_count(axis).unwrap());
            assert_eq!(lanes.lane_len(), shape[axis]);
            assert_eq!(lanes.lane_stride(), strides[axis]);
            assert_eq!(
                layout.lane_count(axis).unwrap() * layout.axis_len(axis).unwrap(),
                layout.num_elements().unwrap()
            );
        }
        assert!(matches!(
            layout.lanes(3),
            Err(WaveplanError::AxisOutOfRange(3, 3))
        ));
    }

    #[test]
    fn test_one_dimensional_single_lane() {
        let shape = [9usize];
        let strides = [1isize];
        let layout = ArrayLayout::new(&shape, &strides).unwrap();
        let offsets: Vec<isize> = layout.lanes(0).unwrap().collect();
        assert_eq!(offsets, vec![0]);
    }

    #[test]
    fn test_negative_stride_lanes() {
        // Axis 1 reversed: lanes along axis 0 start at each column base
        let shape = [2usize, 3];
        let strides = [3isize, -1];
        let layout = ArrayLayout::new(&shape, &strides).unwrap();
        let offsets: Vec<isize> = layout.lanes(0).unwrap().collect();
        assert_eq!(offsets, vec![0, -1, -2]);
    }

    #[test]
    fn test_num_elements_overflow() {
        let shape = [usize::MAX, 2, 2];
        let strides = [1isize, 1, 1];
        let layout = ArrayLayout::new(&shape, &strides).unwrap();
        assert!(matches!(
            layout.num_elements(),
            Err(WaveplanError::Overflow)
        ));
        assert!(matches!(layout.lane_count(0), Ok(4)));
        assert!(matches!(
            layout.lane_count(2),
            Err(WaveplanError::Overflow)
        ));
    }
}
