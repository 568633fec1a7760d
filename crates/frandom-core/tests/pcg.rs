use frandom_core::{derive_seed, Pcg32, RandomSource, SplitMix64};

#[test]
fn seeded_stream_matches_golden_words() {
    let mut pcg = Pcg32::with_seed(12345);
    assert_eq!(pcg.state(), 0x2211_8258_a9d1_11a0);
    let words: Vec<u32> = (0..5).map(|_| pcg.next_u32()).collect();
    assert_eq!(words, [2485327289, 2512840169, 18403374, 3654349520, 2209932971]);
}

#[test]
fn default_stream_starts_from_raw_seed() {
    let mut pcg = Pcg32::new();
    let words: Vec<u32> = (0..3).map(|_| pcg.next_u32()).collect();
    assert_eq!(words, [0, 1882538953, 1534987090]);
}

#[test]
fn zero_seed_is_mixed_away_from_zero() {
    let mut pcg = Pcg32::with_seed(0);
    assert_ne!(pcg.state(), 0);
    let words: Vec<u32> = (0..3).map(|_| pcg.next_u32()).collect();
    assert_eq!(words, [1092706980, 278790474, 1039822109]);
}

#[test]
fn reseed_uses_the_seed_mixer() {
    let pcg = Pcg32::with_seed(777);
    assert_eq!(pcg.state(), SplitMix64::new(777).next_u64());
}

#[test]
fn same_seed_gives_same_sequence() {
    let mut a = Pcg32::with_seed(0xDEAD_BEEF);
    let mut b = Pcg32::with_seed(0xDEAD_BEEF);
    for _ in 0..10_000 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
}

#[test]
fn state_never_observed_at_zero() {
    for seed in 0..256u64 {
        let mut pcg = Pcg32::with_seed(seed);
        for _ in 0..1_000 {
            assert_ne!(pcg.state(), 0, "seed {seed}");
            pcg.next_u32();
        }
    }
}

#[test]
fn generic_and_inherent_draws_agree() {
    fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> u32 {
        rng.next_u32()
    }

    let mut a = Pcg32::with_seed(5);
    let mut b = Pcg32::with_seed(5);
    let dynamic: &mut dyn RandomSource = &mut b;
    for _ in 0..16 {
        assert_eq!(a.next_u32(), draw(&mut *dynamic));
    }
}

#[test]
fn per_thread_streams_are_reproducible() {
    let sequential: Vec<Vec<u32>> = (0..4u64)
        .map(|i| {
            let mut pcg = Pcg32::with_seed(derive_seed(42, i));
            (0..64).map(|_| pcg.next_u32()).collect()
        })
        .collect();

    let threaded: Vec<Vec<u32>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                scope.spawn(move || {
                    let mut pcg = Pcg32::with_seed(derive_seed(42, i));
                    (0..64).map(|_| pcg.next_u32()).collect::<Vec<u32>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    assert_eq!(sequential, threaded);
    assert_ne!(sequential[0], sequential[1]);
}
