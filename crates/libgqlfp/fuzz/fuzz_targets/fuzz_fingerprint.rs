#![no_main]

use libfuzzer_sys::fuzz_target;
use libgqlfp::DigestHasher;
use sha1::Sha1;

fuzz_target!(|data: &[u8]| {
    let mut hasher = DigestHasher::<Sha1>::new();
    let mut fingerprint = Vec::new();
    let _ = libgqlfp::fingerprint_into(&mut fingerprint, &mut hasher, data);
});
