#![no_main]

use libfuzzer_sys::fuzz_target;
use seqstamp_fuzz::IdentifierInput;

fuzz_target!(|input: IdentifierInput| {
    seqstamp_fuzz::check_roundtrip(&input);
});
