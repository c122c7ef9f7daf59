mod tests {
    use bee_lights::tick::MAX_WAIT_TICKS;
    use bee_lights::{Duration, TimingConfig};

    #[test]
    fn test_default_conversions() {
        let config = TimingConfig::new();
        assert_eq!(config.deciseconds(1), 25);
        assert_eq!(config.deciseconds(10), 245);
        assert_eq!(config.long_press_ticks(), 733);
    }

    #[test]
    fn test_zero_wait_is_one_tick() {
        let config = TimingConfig::default();
        assert_eq!(config.deciseconds(0), 1);
        assert_eq!(config.ticks_in(Duration::from_ticks(0)), 1);
    }

    #[test]
    fn test_round_period() {
        let config = TimingConfig {
            tick_period: Duration::from_millis(4),
            ..TimingConfig::new()
        };
        assert_eq!(config.deciseconds(1), 25);
        assert_eq!(config.deciseconds(30), 750);
        assert_eq!(config.long_press_ticks(), 750);
    }

    #[test]
    fn test_waits_capped_at_half_range() {
        let config = TimingConfig {
            tick_period: Duration::from_micros(10),
            ..TimingConfig::new()
        };
        assert_eq!(config.deciseconds(255), MAX_WAIT_TICKS);
    }
}
