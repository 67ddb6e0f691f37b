//! Process classification by Cp.
//!
//! | Cp | Class | Decision |
//! |----|-------|----------|
//! | > 2 | world-class | has six-sigma quality |
//! | 1.33 ..= 2 | 1 | more than adequate |
//! | 1 .. 1.33 | 2 | adequate with strict control |
//! | 0.67 .. 1 | 3 | not adequate; requires serious modification |
//! | < 0.67 | 4 | not adequate; requires serious modification |

use serde::{Deserialize, Serialize};

use crate::measure::Measure;

/// Cp above which a process is world class.
pub const WORLD_CLASS_CP: f64 = 2.0;
/// Lower bound of class 1.
pub const CLASS_1_CP: f64 = 1.33;
/// Lower bound of class 2.
pub const CLASS_2_CP: f64 = 1.0;
/// Lower bound of class 3.
pub const CLASS_3_CP: f64 = 0.67;

/// Capability class of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityClass {
    /// Cp could not be computed.
    Undetermined,
    WorldClass,
    Class1,
    Class2,
    Class3,
    Class4,
}

impl CapabilityClass {
    /// Looks up the class for a Cp value. A non-finite payload is treated
    /// as not computable.
    pub fn from_cp(cp: Measure) -> Self {
        match cp.value().filter(|v| v.is_finite()) {
            None => Self::Undetermined,
            Some(cp) if cp > WORLD_CLASS_CP => Self::WorldClass,
            Some(cp) if cp >= CLASS_1_CP => Self::Class1,
            Some(cp) if cp >= CLASS_2_CP => Self::Class2,
            Some(cp) if cp >= CLASS_3_CP => Self::Class3,
            Some(_) => Self::Class4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Undetermined => "—",
            Self::WorldClass => "world-class",
            Self::Class1 => "1",
            Self::Class2 => "2",
            Self::Class3 => "3",
            Self::Class4 => "4",
        }
    }

    pub fn decision(self) -> &'static str {
        match self {
            Self::Undetermined => "insufficient information",
            Self::WorldClass => "has six-sigma quality",
            Self::Class1 => "more than adequate",
            Self::Class2 => "adequate with strict control",
            Self::Class3 | Self::Class4 => "not adequate; requires serious modification",
        }
    }
}

/// Class and decision for a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub class: CapabilityClass,
    /// Display label of the class.
    pub class_label: &'static str,
    /// Recommended decision.
    pub decision_text: &'static str,
}

/// Classifies a process by its Cp.
///
/// # Examples
///
/// ```
/// use sigmax::capability::{classify, CapabilityClass};
/// use sigmax::measure::Measure;
///
/// let c = classify(Measure::Computed(1.5));
/// assert_eq!(c.class, CapabilityClass::Class1);
/// assert_eq!(c.class_label, "1");
/// assert_eq!(c.decision_text, "more than adequate");
///
/// assert_eq!(classify(Measure::NotComputable).decision_text, "insufficient information");
/// ```
pub fn classify(cp: Measure) -> Classification {
    let class = CapabilityClass::from_cp(cp);
    Classification {
        class,
        class_label: class.label(),
        decision_text: class.decision(),
    }
}
