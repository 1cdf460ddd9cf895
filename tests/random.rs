mod tests {
    use neopixel_controller::random::Prng;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Prng::new(42);
        let mut b = Prng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Prng::new(1);
        let mut b = Prng::new(2);
        let a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut rng = Prng::default();
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let value = rng.range(3, 6);
            assert!((3..=6).contains(&value));
            seen[usize::from(value - 3)] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_empty_range() {
        let mut rng = Prng::new(7);
        assert_eq!(rng.range(9, 9), 9);
        assert_eq!(rng.range(9, 2), 9);
    }

    #[test]
    fn test_full_range() {
        let mut rng = Prng::new(7);
        for _ in 0..1_000 {
            rng.range(0, 255);
        }
    }
}
