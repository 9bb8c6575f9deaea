#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input
    let _ = zenpam::decode_bytes(data, "fuzz");
    let _ = zenpam::probe(data, "fuzz");

    // Limits must reject before allocating
    let mut decoder = zenpam::PamDecoder::new().with_limits(zenpam::Limits {
        max_memory_bytes: Some(1 << 20),
        ..Default::default()
    });
    if let Ok(bitmap) = decoder.decode_bytes(data, "fuzz") {
        assert_eq!(bitmap.stride, usize::from(bitmap.width) * 4);
        assert_eq!(bitmap.pixels().len(), bitmap.stride * usize::from(bitmap.height));
    }
});
