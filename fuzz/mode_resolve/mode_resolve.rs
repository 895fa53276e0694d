#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use waveplan::{ExtensionMode, ExtensionResolver, SampleSource};

#[derive(Arbitrary, Debug)]
struct Data {
    length: u16,
    position: i32,
    mode: u8,
}

const MODES: [ExtensionMode; 7] = [
    ExtensionMode::ZeroPad,
    ExtensionMode::ConstantEdge,
    ExtensionMode::Symmetric,
    ExtensionMode::Reflect,
    ExtensionMode::Smooth,
    ExtensionMode::Periodic,
    ExtensionMode::Periodization,
];

fuzz_target!(|data: Data| {
    if data.length == 0 {
        return;
    }
    let len = data.length as usize;
    let position = data.position as isize;
    let mode = MODES[data.mode as usize % MODES.len()];
    let resolver = ExtensionResolver::new(mode, len).unwrap();
    let source = resolver.resolve(position);
    assert_eq!(source, mode.resolve(position, len).unwrap());
    match source {
        SampleSource::Index(index) => assert!(index < len),
        SampleSource::Zero => assert_eq!(mode, ExtensionMode::ZeroPad),
        SampleSource::Extrapolate { distance, .. } => {
            assert_eq!(mode, ExtensionMode::Smooth);
            assert!(distance >= 1);
        }
    }
    if position >= 0 && (position as usize) < len {
        assert_eq!(source, SampleSource::Index(position as usize));
    }
});
