//! # Run configuration and boundary clamping.
//!
//! Provides [`RunConfig`], the settings for one scheduler run.
//!
//! Out-of-range values never reach the core: [`RunConfig::clamped`] pushes
//! them back into range at the boundary, so the generator, engine, and
//! scheduler can assume valid inputs.
//!
//! ## Sentinel values
//! - `interval = 0` → growth disabled (no ticks fire, the single sort runs
//!   to completion). Zero survives clamping; only non-zero intervals are
//!   pulled into `[MIN_INTERVAL, MAX_INTERVAL]`.

use std::time::Duration;

/// Smallest accepted dataset size.
pub const MIN_SIZE: usize = 2;
/// Largest accepted dataset size.
pub const MAX_SIZE: usize = 1_000_000;
/// Shortest accepted growth period.
pub const MIN_INTERVAL: Duration = Duration::from_millis(50);
/// Longest accepted growth period.
pub const MAX_INTERVAL: Duration = Duration::from_millis(1000);

/// Configuration for one [`GrowthScheduler`](crate::GrowthScheduler) run.
///
/// ## Field semantics
/// - `size`: initial dataset length, clamped into `[MIN_SIZE, MAX_SIZE]`
/// - `interval`: growth period; `0` disables growth, non-zero values are
///   clamped into `[MIN_INTERVAL, MAX_INTERVAL]`
/// - `max_ticks`: growth tick budget; once reached, no further ticks fire
/// - `bus_capacity`: event bus ring buffer size (min 1, clamped by the bus)
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Initial dataset size.
    pub size: usize,
    /// Period between growth ticks. `Duration::ZERO` disables growth.
    pub interval: Duration,
    /// Maximum number of growth ticks for this run.
    pub max_ticks: u32,
    /// Capacity of the event bus broadcast channel.
    pub bus_capacity: usize,
}

impl Default for RunConfig {
    /// Default run:
    ///
    /// - `size = 100_000`
    /// - `interval = 50ms`
    /// - `max_ticks = 100`
    /// - `bus_capacity = 1024`
    fn default() -> Self {
        Self {
            size: 100_000,
            interval: Duration::from_millis(50),
            max_ticks: 100,
            bus_capacity: 1024,
        }
    }
}

impl RunConfig {
    /// True when growth ticks are enabled for this configuration.
    #[inline]
    pub fn growth_enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    /// Returns a copy with out-of-range values pushed back into range.
    ///
    /// A zero interval stays zero (growth disabled); everything else is
    /// clamped rather than rejected.
    pub fn clamped(&self) -> Self {
        let interval = if self.interval.is_zero() {
            Duration::ZERO
        } else {
            self.interval.clamp(MIN_INTERVAL, MAX_INTERVAL)
        };
        Self {
            size: self.size.clamp(MIN_SIZE, MAX_SIZE),
            interval,
            max_ticks: self.max_ticks,
            bus_capacity: self.bus_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pushes_size_into_range() {
        let cfg = RunConfig {
            size: 0,
            ..RunConfig::default()
        };
        assert_eq!(cfg.clamped().size, MIN_SIZE);

        let cfg = RunConfig {
            size: 5_000_000,
            ..RunConfig::default()
        };
        assert_eq!(cfg.clamped().size, MAX_SIZE);
    }

    #[test]
    fn clamp_pushes_interval_into_range() {
        let cfg = RunConfig {
            interval: Duration::from_millis(5),
            ..RunConfig::default()
        };
        assert_eq!(cfg.clamped().interval, MIN_INTERVAL);

        let cfg = RunConfig {
            interval: Duration::from_secs(30),
            ..RunConfig::default()
        };
        assert_eq!(cfg.clamped().interval, MAX_INTERVAL);
    }

    #[test]
    fn zero_interval_survives_clamping_as_disabled() {
        let cfg = RunConfig {
            interval: Duration::ZERO,
            ..RunConfig::default()
        };
        let clamped = cfg.clamped();
        assert_eq!(clamped.interval, Duration::ZERO);
        assert!(!clamped.growth_enabled());
    }

    #[test]
    fn in_range_values_pass_through() {
        let cfg = RunConfig {
            size: 4_242,
            interval: Duration::from_millis(75),
            max_ticks: 7,
            bus_capacity: 16,
        };
        let clamped = cfg.clamped();
        assert_eq!(clamped.size, 4_242);
        assert_eq!(clamped.interval, Duration::from_millis(75));
        assert_eq!(clamped.max_ticks, 7);
        assert!(clamped.growth_enabled());
    }
}
