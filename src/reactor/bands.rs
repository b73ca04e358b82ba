//! Threshold table driving the reactor core color and advisory text.

/// Color of the reactor core sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreColor {
    Blue,
    Yellow,
    Orange,
    Red,
}

impl CoreColor {
    /// CSS class applied to the core element
    pub fn css_class(&self) -> &'static str {
        match self {
            CoreColor::Blue => "core-blue",
            CoreColor::Yellow => "core-yellow",
            CoreColor::Orange => "core-orange",
            CoreColor::Red => "core-red",
        }
    }

    /// Glow color used in the core's box-shadow
    pub fn glow_rgba(&self) -> &'static str {
        match self {
            CoreColor::Blue => "rgba(59, 130, 246, 0.7)",
            CoreColor::Yellow => "rgba(234, 179, 8, 0.7)",
            CoreColor::Orange => "rgba(249, 115, 22, 0.7)",
            CoreColor::Red => "rgba(239, 68, 68, 0.7)",
        }
    }
}

/// One row of the threshold table. A temperature belongs to the first band
/// whose `below` bound it is strictly less than.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub below: f64,
    pub color: CoreColor,
    pub message: &'static str,
}

/// Ordered by ascending bound; the last row is the catch-all.
pub const BANDS: [Band; 5] = [
    Band {
        below: 100.0,
        color: CoreColor::Blue,
        message: "Нагрев начат. Система стабильна.",
    },
    Band {
        below: 1_000.0,
        color: CoreColor::Yellow,
        message: "Температура растет. Все системы в норме.",
    },
    Band {
        below: 10_000.0,
        color: CoreColor::Orange,
        message: "Высокая температура. Экранирование активно.",
    },
    Band {
        below: 100_000.0,
        color: CoreColor::Red,
        message: "Критическая температура! Максимальная мощность экранирования.",
    },
    Band {
        below: f64::INFINITY,
        color: CoreColor::Red,
        message: "ВНИМАНИЕ! Планковская температура! Пространственно-временные искажения!",
    },
];

/// Look up the band for a temperature.
pub fn band_for(temp: f64) -> &'static Band {
    BANDS
        .iter()
        .find(|band| temp < band.below)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

/// Box-shadow `(blur, spread)` in pixels for the reactor core.
///
/// Both grow with `ln(T)` and are capped at 60px and 40px.
pub fn core_glow(temp: f64) -> (f64, f64) {
    let ln_t = temp.max(1.0).ln();
    ((ln_t * 3.0).min(60.0), (ln_t * 2.0).min(40.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_ascending() {
        for pair in BANDS.windows(2) {
            assert!(pair[0].below < pair[1].below);
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band_for(20.0).color, CoreColor::Blue);
        assert_eq!(band_for(99.9).color, CoreColor::Blue);
        assert_eq!(band_for(100.0).color, CoreColor::Yellow);
        assert_eq!(band_for(999.0).color, CoreColor::Yellow);
        assert_eq!(band_for(1_000.0).color, CoreColor::Orange);
        assert_eq!(band_for(10_000.0).color, CoreColor::Red);
        assert_eq!(band_for(1.417e32).color, CoreColor::Red);
    }

    #[test]
    fn test_messages_split_red_range() {
        assert_eq!(band_for(20_000.0).message, BANDS[3].message);
        assert_eq!(band_for(99_999.0).message, BANDS[3].message);
        assert_eq!(band_for(100_000.0).message, BANDS[4].message);
        assert_eq!(band_for(f64::INFINITY).message, BANDS[4].message);
    }

    #[test]
    fn test_glow_is_capped() {
        let (blur, spread) = core_glow(20.0);
        assert!((blur - 20f64.ln() * 3.0).abs() < 1e-12);
        assert!((spread - 20f64.ln() * 2.0).abs() < 1e-12);

        // ln(1.417e32) ≈ 74, far beyond both caps
        assert_eq!(core_glow(1.417e32), (60.0, 40.0));
    }
}
