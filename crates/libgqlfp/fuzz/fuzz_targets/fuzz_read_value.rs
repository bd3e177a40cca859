#![no_main]

use libfuzzer_sys::fuzz_target;
use libgqlfp::DigestHasher;
use sha1::Sha1;

fuzz_target!(|data: &[u8]| {
    let mut hasher = DigestHasher::<Sha1>::new();
    let _ = libgqlfp::read_value(&mut hasher, data);
});
