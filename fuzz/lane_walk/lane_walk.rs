#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use waveplan::ArrayLayout;

#[derive(Arbitrary, Debug)]
struct Data {
    extents: Vec<u8>,
    axis: u8,
}

fuzz_target!(|data: Data| {
    if data.extents.is_empty() {
        return;
    }
    let shape: Vec<usize> = data
        .extents
        .iter()
        .take(4)
        .map(|extent| (*extent as usize % 5) + 1)
        .collect();
    let mut strides = vec![0isize; shape.len()];
    let mut acc = 1isize;
    for (stride, len) in strides.iter_mut().zip(shape.iter()).rev() {
        *stride = acc;
        acc *= *len as isize;
    }

    let layout = ArrayLayout::new(&shape, &strides).unwrap();
    let axis = data.axis as usize % layout.ndim();
    let total = layout.num_elements().unwrap();
    let axis_len = layout.axis_len(axis).unwrap();
    let axis_stride = layout.stride(axis).unwrap();

    let mut seen = vec![false; total];
    let mut lanes = 0usize;
    for offset in layout.lanes(axis).unwrap() {
        lanes += 1;
        for step in 0..axis_len {
            let cell = (offset + step as isize * axis_stride) as usize;
            assert!(cell < total);
            assert!(!seen[cell]);
            seen[cell] = true;
        }
    }
    assert_eq!(lanes, layout.lane_count(axis).unwrap());
    assert!(seen.iter().all(|cell| *cell));
});
