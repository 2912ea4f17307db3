#[cfg(test)]
mod tests {
    use crate::counter::{BoundedCounter, CounterConfig};
    use crate::error::CounterError;
    use tracing_test::traced_test;

    fn bounded(min: i64, max: i64) -> BoundedCounter {
        let config = CounterConfig::default().with_bounds(min, max);
        BoundedCounter::new(config).expect("valid bounds")
    }

    #[test]
    fn test_increment() {
        let mut counter = BoundedCounter::default();
        assert_eq!(counter.increment(None), 1);
        assert_eq!(counter.increment(None), 2);
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn test_new() {
        let config = CounterConfig::default().with_initial_value(42);
        let counter = BoundedCounter::new(config).unwrap();
        assert_eq!(counter.value(), 42);
        assert_eq!(counter.initial_value(), 42);
        assert_eq!(counter.step(), 1);
        assert_eq!(counter.min(), i64::MIN);
        assert_eq!(counter.max(), i64::MAX);
    }

    #[test]
    fn test_bounded_scenario() {
        let config = CounterConfig::default()
            .with_initial_value(0)
            .with_step(1)
            .with_bounds(0, 10);
        let mut counter = BoundedCounter::new(config).unwrap();

        assert_eq!(counter.set(8), 8);
        assert_eq!(counter.increment(None), 9);
        assert_eq!(counter.increment(Some(5)), 10);
        assert_eq!(counter.decrement(Some(15)), 0);
    }

    #[test]
    fn test_set_clamps_both_sides() {
        let mut counter = bounded(-5, 5);
        assert_eq!(counter.set(100), 5);
        assert_eq!(counter.set(-100), -5);
        assert_eq!(counter.set(3), 3);
    }

    #[test]
    fn test_reset_returns_initial_value() {
        let config = CounterConfig::default().with_initial_value(10).with_step(5);
        let mut counter = BoundedCounter::new(config).unwrap();
        counter.increment(None);
        counter.decrement(Some(40));
        counter.set_step(7);
        assert_eq!(counter.reset(), 10);
        assert_eq!(counter.value(), 10);
    }

    #[test]
    fn test_reset_to_keeps_configured_start() {
        let mut counter = bounded(0, 10);
        assert_eq!(counter.reset_to(20), 10);
        assert_eq!(counter.reset_to(4), 4);
        assert_eq!(counter.reset(), 0);
    }

    #[test]
    fn test_set_step_only_changes_default_step() {
        let config = CounterConfig::default().with_initial_value(10).with_step(5);
        let mut counter = BoundedCounter::new(config).unwrap();

        assert_eq!(counter.increment(None), 15);
        assert_eq!(counter.increment(Some(3)), 18);
        assert_eq!(counter.set_step(2), 2);
        assert_eq!(counter.increment(None), 20);
        assert_eq!(counter.increment(Some(3)), 23);
        assert_eq!(counter.decrement(None), 21);
    }

    #[test]
    fn test_negative_step_is_accepted() {
        let mut counter = BoundedCounter::default();
        assert_eq!(counter.set_step(-3), -3);
        assert_eq!(counter.increment(None), -3);
        assert_eq!(counter.decrement(None), 0);
    }

    #[test]
    fn test_counters_do_not_share_state() {
        let mut first = BoundedCounter::default();
        let mut second = BoundedCounter::default();

        first.increment(None);
        first.increment(None);
        second.decrement(Some(4));

        assert_eq!(first.value(), 2);
        assert_eq!(second.value(), -4);
    }

    #[test]
    fn test_unbounded_arithmetic_saturates() {
        let mut counter = BoundedCounter::default();
        counter.set(i64::MAX - 1);
        assert_eq!(counter.increment(Some(10)), i64::MAX);
        counter.set(i64::MIN);
        assert_eq!(counter.decrement(None), i64::MIN);
    }

    #[test]
    fn test_min_greater_than_max_is_rejected() {
        let config = CounterConfig::default().with_bounds(10, 0);
        let err = BoundedCounter::new(config).unwrap_err();
        assert!(matches!(err, CounterError::InvalidBounds { min: 10, max: 0 }));
    }

    #[test]
    fn test_single_point_bounds() {
        let mut counter = bounded(3, 3);
        assert_eq!(counter.value(), 3);
        assert_eq!(counter.increment(None), 3);
        assert_eq!(counter.decrement(Some(100)), 3);
    }

    #[test]
    fn test_initial_value_outside_bounds_is_clamped() {
        let config = CounterConfig::default()
            .with_initial_value(50)
            .with_bounds(0, 10);
        let mut counter = BoundedCounter::new(config).unwrap();
        assert_eq!(counter.value(), 10);
        assert_eq!(counter.initial_value(), 10);
        counter.set(2);
        assert_eq!(counter.reset(), 10);
    }

    #[traced_test]
    #[test]
    fn test_mutations_are_logged() {
        let mut counter = bounded(0, 10);
        counter.increment(None);
        counter.set(99);

        assert!(logs_contain("Counter incremented to: 1"));
        assert!(logs_contain("Requested value 99 clamped to 10"));
    }

    #[traced_test]
    #[test]
    fn test_reset_and_step_changes_are_spanned() {
        let mut counter = bounded(0, 10);
        counter.set_step(7);
        counter.reset_to(4);
        counter.reset();

        assert!(logs_contain("set_counter_step{step=7}"));
        assert!(logs_contain("reset_counter_to{value=4}"));
        assert!(logs_contain("Counter reset to: 0"));
    }
}
