#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PAM RGB 2x1
    let rgb = b"P7\nWIDTH 2\nHEIGHT 1\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n\xff\x00\x00\x00\xff\x00";
    fs::write(format!("{dir}/pam_rgb_2x1.pam"), rgb).unwrap();

    // PAM RGBA 1x1
    let rgba = b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n\xff\x00\x00\xff";
    fs::write(format!("{dir}/pam_rgba_1x1.pam"), rgba).unwrap();

    // Shuffled header with a repeated field
    let shuffled = b"P7\nTUPLTYPE RGB\nWIDTH 9\nMAXVAL 255\nHEIGHT 1\nDEPTH 3\nWIDTH 1\nENDHDR\n\x01\x02\x03";
    fs::write(format!("{dir}/pam_shuffled.pam"), shuffled).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p7.bin"), b"P7").unwrap();
    fs::write(format!("{dir}/p7_no_endhdr.bin"), b"P7\nWIDTH 1\nHEIGHT 1\n").unwrap();
    fs::write(format!("{dir}/p7_maxval_16bit.bin"), b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 3\nMAXVAL 65535\nTUPLTYPE RGB\nENDHDR\n\x00\x00\x00\x00\x00\x00").unwrap();
    fs::write(format!("{dir}/p7_gray.bin"), b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 1\nMAXVAL 255\nTUPLTYPE GRAYSCALE\nENDHDR\n\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
