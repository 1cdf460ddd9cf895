mod tests {
    use neopixel_controller::{Clock, Duration, SystemClock};

    #[test]
    fn test_system_clock_sleeps() {
        let mut clock = SystemClock;
        let start = clock.now();
        clock.sleep(Duration::from_millis(3));
        assert!(clock.now() - start >= Duration::from_millis(3));
    }
}
