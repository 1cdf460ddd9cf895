mod tests {
    use embassy_time::{Duration, Instant};
    use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin};
    use neopixel_controller::button::{Button, Debouncer};

    const WINDOW: Duration = Duration::from_millis(200);

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_first_press_is_accepted() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(debouncer.update(true, at(0)));
        assert_eq!(debouncer.last_accepted(), Some(at(0)));
    }

    #[test]
    fn test_holding_does_not_repeat() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(debouncer.update(true, at(10)));
        for ms in (15..2_000).step_by(5) {
            assert!(!debouncer.update(true, at(ms)));
        }
    }

    #[test]
    fn test_bounces_inside_window_are_ignored() {
        let mut debouncer = Debouncer::new(WINDOW);
        let mut accepted = 0;
        // Contact bounce: level flips every 5 ms for 150 ms
        for step in 0..30u64 {
            if debouncer.update(step % 2 == 0, at(1_000 + step * 5)) {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 1);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(debouncer.update(true, at(0)));
        assert!(!debouncer.update(false, at(100)));
        assert!(!debouncer.update(true, at(200)));
        assert!(!debouncer.update(false, at(201)));
        assert!(debouncer.update(true, at(202)));
    }

    #[test]
    fn test_rejected_press_does_not_restart_window() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(debouncer.update(true, at(0)));
        debouncer.update(false, at(50));
        assert!(!debouncer.update(true, at(150)));
        debouncer.update(false, at(180));
        assert!(debouncer.update(true, at(201)));
    }

    #[test]
    fn test_release_is_never_a_press() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(!debouncer.update(false, at(0)));
        assert!(!debouncer.update(false, at(500)));
    }

    #[derive(Debug)]
    struct ReadError;

    impl digital::Error for ReadError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ReadError;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ReadError)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ReadError)
        }
    }

    #[test]
    fn test_failed_read_counts_as_released() {
        let mut button = Button::new(BrokenPin, WINDOW);
        assert!(!button.sample(at(0)));
        assert!(!button.sample(at(1_000)));
        assert_eq!(button.debouncer().last_accepted(), None);
    }

    struct LowPin;

    impl ErrorType for LowPin {
        type Error = core::convert::Infallible;
    }

    impl InputPin for LowPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(false)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(true)
        }
    }

    #[test]
    fn test_low_level_is_pressed() {
        let mut button = Button::new(LowPin, WINDOW);
        assert!(button.sample(at(0)));
        assert!(!button.sample(at(300)));
    }
}
