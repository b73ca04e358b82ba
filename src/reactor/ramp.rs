use super::config::{LOW_STEP_DIVISOR, LOW_TARGET, PLANCK_STEPS, PLANCK_TEMP};

/// Result of advancing a ramp by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampStep {
    pub temperature: f64,
    pub done: bool,
}

/// A timed interpolation moving the temperature toward a target, one tick
/// at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Ramp {
    /// Proportional convergence: each tick closes 1/100 of the remaining gap,
    /// but never less than one degree.
    Low { current: f64, target: f64 },
    /// Fixed-length linear interpolation in log space, which reads as an
    /// exponential curve on screen.
    Planck {
        log_start: f64,
        log_end: f64,
        target: f64,
        step: u32,
        steps: u32,
    },
}

impl Ramp {
    /// First-stage ramp from `from` up to 20 000°C.
    pub fn low(from: f64) -> Self {
        Ramp::Low {
            current: from,
            target: LOW_TARGET,
        }
    }

    /// Second-stage ramp from `from` up to the Planck temperature.
    ///
    /// `from` must be positive; the reactor never drops below ambient.
    pub fn planck(from: f64) -> Self {
        Ramp::Planck {
            log_start: from.ln(),
            log_end: PLANCK_TEMP.ln(),
            target: PLANCK_TEMP,
            step: 0,
            steps: PLANCK_STEPS,
        }
    }

    pub fn target(&self) -> f64 {
        match self {
            Ramp::Low { target, .. } | Ramp::Planck { target, .. } => *target,
        }
    }

    /// Advance one tick. Once `done` is reported, further calls keep
    /// returning the target.
    pub fn advance(&mut self) -> RampStep {
        match self {
            Ramp::Low { current, target } => {
                let increment = ((*target - *current) / LOW_STEP_DIVISOR).floor().max(1.0);
                *current = (*current + increment).min(*target);
                RampStep {
                    temperature: *current,
                    done: *current >= *target,
                }
            }
            Ramp::Planck {
                log_start,
                log_end,
                target,
                step,
                steps,
            } => {
                *step = (*step + 1).min(*steps);
                if *step >= *steps {
                    // Land exactly on the target instead of exp(ln(x))
                    return RampStep {
                        temperature: *target,
                        done: true,
                    };
                }
                let progress = f64::from(*step) / f64::from(*steps);
                let log_current = *log_start + (*log_end - *log_start) * progress;
                RampStep {
                    temperature: log_current.exp(),
                    done: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(ramp: &mut Ramp, max_ticks: usize) -> (Vec<f64>, usize) {
        let mut temps = Vec::new();
        for tick in 1..=max_ticks {
            let step = ramp.advance();
            temps.push(step.temperature);
            if step.done {
                return (temps, tick);
            }
        }
        panic!("ramp did not finish within {} ticks", max_ticks);
    }

    #[test]
    fn test_low_ramp_first_step() {
        let mut ramp = Ramp::low(20.0);
        // floor((20000 - 20) / 100) = 199
        assert_eq!(ramp.advance().temperature, 219.0);
    }

    #[test]
    fn test_low_ramp_converges_exactly() {
        let mut ramp = Ramp::low(20.0);
        let (temps, ticks) = run_to_completion(&mut ramp, 2_000);
        assert_eq!(*temps.last().unwrap(), 20_000.0);
        assert!(ticks < 1_000, "took {} ticks", ticks);
        for pair in temps.windows(2) {
            assert!(pair[1] > pair[0], "low ramp must strictly increase");
        }
    }

    #[test]
    fn test_low_ramp_minimum_step_is_one_degree() {
        let mut ramp = Ramp::low(19_950.0);
        let step = ramp.advance();
        assert_eq!(step.temperature, 19_951.0);
        assert!(!step.done);
    }

    #[test]
    fn test_low_ramp_already_at_target_finishes_in_one_tick() {
        let mut ramp = Ramp::low(20_000.0);
        let step = ramp.advance();
        assert_eq!(step.temperature, 20_000.0);
        assert!(step.done);
    }

    #[test]
    fn test_planck_ramp_takes_exactly_200_ticks() {
        let mut ramp = Ramp::planck(20_000.0);
        let (temps, ticks) = run_to_completion(&mut ramp, 1_000);
        assert_eq!(ticks, 200);
        assert_eq!(*temps.last().unwrap(), 1.417e32);
    }

    #[test]
    fn test_planck_ramp_is_geometric() {
        let mut ramp = Ramp::planck(20_000.0);
        let t1 = ramp.advance().temperature;
        let t2 = ramp.advance().temperature;
        let t3 = ramp.advance().temperature;
        // Constant ratio between consecutive ticks
        let r1 = t2 / t1;
        let r2 = t3 / t2;
        assert!((r1 - r2).abs() / r1 < 1e-9, "ratios {} vs {}", r1, r2);
        assert!(t1 > 20_000.0);
    }

    #[test]
    fn test_planck_ramp_midpoint_is_geometric_mean() {
        let mut ramp = Ramp::planck(20_000.0);
        let mut mid = 0.0;
        for _ in 0..100 {
            mid = ramp.advance().temperature;
        }
        let expected = (20_000.0_f64 * 1.417e32).sqrt();
        assert!((mid - expected).abs() / expected < 1e-9);
    }

    #[test]
    fn test_finished_ramp_stays_at_target() {
        let mut ramp = Ramp::planck(20_000.0);
        for _ in 0..200 {
            ramp.advance();
        }
        let step = ramp.advance();
        assert!(step.done);
        assert_eq!(step.temperature, ramp.target());
    }
}
