#![no_main]
use libfuzzer_sys::fuzz_target;

use libpolydrill::{generate_problems, EmitFormat, Error, ProblemConfig, ProblemSheet};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fuzz_target!(|data: (u64, u8, u8, i8, i8, i8, i8, bool, bool)| {
    let (
        seed,
        min_degree,
        max_degree,
        numer_min,
        numer_max,
        denom_min,
        denom_max,
        allow_int,
        allow_frac,
    ) = data;
    let config = ProblemConfig {
        count: 4,
        min_degree: (min_degree % 24) as u32,
        max_degree: (max_degree % 24) as u32,
        numer_min: numer_min as i64,
        numer_max: numer_max as i64,
        denom_min: denom_min as i64,
        denom_max: denom_max as i64,
        allow_int,
        allow_frac,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut sheet = ProblemSheet::default();
    match generate_problems(&config, EmitFormat::Latex, &mut rng, &mut sheet) {
        Ok(()) => assert_eq!(sheet.problems.len(), sheet.answers.len()),
        Err(Error::Config(_)) | Err(Error::Arithmetic(_)) => assert!(sheet.problems.is_empty()),
        Err(e) => panic!("unexpected error: {}", e),
    }
});
