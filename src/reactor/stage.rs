/// Experiment stage reached so far. Encoded 0/1/2 and only ever advances,
/// except when the experiment is reset.
///
/// `Idle` is the initial configuration, `HeatingLow` is entered once the
/// first ramp has reached 20 000°C, and `HeatingPlanck` is the terminal
/// stage entered when the Planck ramp completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Stage {
    #[default]
    Idle = 0,
    HeatingLow = 1,
    HeatingPlanck = 2,
}

impl Stage {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether the reactor runs the upgraded hardware (any stage past `Idle`)
    pub fn is_upgraded(self) -> bool {
        self != Stage::Idle
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::HeatingPlanck
    }

    /// The stage that follows this one, if any
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Idle => Some(Stage::HeatingLow),
            Stage::HeatingLow => Some(Stage::HeatingPlanck),
            Stage::HeatingPlanck => None,
        }
    }

    /// Hardware configuration shown in the control panel for this stage
    pub fn profile(self) -> StageProfile {
        match self {
            Stage::Idle => StageProfile::BASIC,
            Stage::HeatingLow | Stage::HeatingPlanck => StageProfile::UPGRADED,
        }
    }

    /// Label of the start button
    pub fn start_label(self) -> &'static str {
        match self {
            Stage::Idle => "Запустить нагрев до 20 000°C",
            Stage::HeatingLow => "Запустить нагрев до планковской температуры",
            Stage::HeatingPlanck => "Эксперимент завершен",
        }
    }
}

/// Reactor hardware as displayed for a given stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageProfile {
    pub capacitors: u32,
    pub inductors: u32,
    pub shielding: &'static str,
    /// Width of the shield bar, in percent
    pub shield_pct: u8,
    pub protection: &'static str,
}

impl StageProfile {
    const BASIC: StageProfile = StageProfile {
        capacitors: 12,
        inductors: 8,
        shielding: "Базовое титановое",
        shield_pct: 30,
        protection: "Стандартный",
    };

    const UPGRADED: StageProfile = StageProfile {
        capacitors: 1024,
        inductors: 512,
        shielding: "Многослойное с наноматериалами",
        shield_pct: 100,
        protection: "Максимальный",
    };
}
