#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use waveplan::{
    dwt_buffer_length, idwt_buffer_length, reconstruction_buffer_length, DecompositionPlan,
    ExtensionMode,
};

#[derive(Arbitrary, Debug)]
struct Data {
    length: u16,
    half_taps: u8,
    mode: u8,
    levels: u8,
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
    if data.length == 0 || data.half_taps == 0 {
        return;
    }
    let input_len = data.length as usize;
    let filter_len = 2 * data.half_taps as usize;
    let mode = MODES[data.mode as usize % MODES.len()];

    let coeffs_len = dwt_buffer_length(input_len, filter_len, mode).unwrap();
    assert!(coeffs_len >= 1);

    let rebuilt = idwt_buffer_length(coeffs_len, filter_len, mode).unwrap();
    assert!(rebuilt >= input_len);

    let direct = reconstruction_buffer_length(coeffs_len, filter_len).unwrap();
    assert!(direct >= rebuilt);

    if data.levels > 0 {
        if let Ok(plan) = DecompositionPlan::new(input_len, filter_len, mode, data.levels as usize)
        {
            assert_eq!(plan.coeff_len(1), Some(coeffs_len));
            assert!(plan.total_coeff_len().unwrap() >= plan.final_approx_len());
        }
    }
});
