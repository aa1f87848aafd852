use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::IndexError;

/// The six CRS-R subscales, in instrument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscale {
    Auditory,
    Visual,
    Motor,
    Oromotor,
    Communication,
    Arousal,
}

impl Subscale {
    pub const ALL: [Subscale; 6] = [
        Subscale::Auditory,
        Subscale::Visual,
        Subscale::Motor,
        Subscale::Oromotor,
        Subscale::Communication,
        Subscale::Arousal,
    ];

    /// Highest valid raw score for this subscale.
    pub fn max_score(self) -> u8 {
        match self {
            Subscale::Auditory => 4,
            Subscale::Visual => 5,
            Subscale::Motor => 6,
            Subscale::Oromotor => 3,
            Subscale::Communication => 2,
            Subscale::Arousal => 3,
        }
    }

    /// Boundary between the reflexive and cognitively mediated score ranges,
    /// fixed by the published scoring rules. `None` for the two subscales
    /// that are not split (Communication counts entirely as cognitively
    /// mediated; Arousal contributes its own additive term).
    pub fn reflex_ceiling(self) -> Option<u8> {
        match self {
            Subscale::Auditory => Some(2),
            Subscale::Visual => Some(1),
            Subscale::Motor => Some(2),
            Subscale::Oromotor => Some(2),
            Subscale::Communication | Subscale::Arousal => None,
        }
    }

    /// Column-name form of the subscale, as used in dataset headers.
    pub fn name(self) -> &'static str {
        match self {
            Subscale::Auditory => "Auditory",
            Subscale::Visual => "Visual",
            Subscale::Motor => "Motor",
            Subscale::Oromotor => "Oromotor",
            Subscale::Communication => "Communication",
            Subscale::Arousal => "Arousal",
        }
    }

    pub fn from_name(name: &str) -> Option<Subscale> {
        Subscale::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Subscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One assessment's worth of raw subscores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssessmentRecord {
    pub auditory: u8,
    pub visual: u8,
    pub motor: u8,
    pub oromotor: u8,
    pub communication: u8,
    pub arousal: u8,
}

impl AssessmentRecord {
    pub fn get(&self, subscale: Subscale) -> u8 {
        match subscale {
            Subscale::Auditory => self.auditory,
            Subscale::Visual => self.visual,
            Subscale::Motor => self.motor,
            Subscale::Oromotor => self.oromotor,
            Subscale::Communication => self.communication,
            Subscale::Arousal => self.arousal,
        }
    }

    /// Check every subscore against its subscale's valid ordinal range.
    pub fn validate(&self) -> Result<(), IndexError> {
        for subscale in Subscale::ALL {
            let value = self.get(subscale);
            let max = subscale.max_score();
            if value > max {
                return Err(IndexError::OutOfRange {
                    subscale,
                    value,
                    max,
                });
            }
        }
        Ok(())
    }
}
