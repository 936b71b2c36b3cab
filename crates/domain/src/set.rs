use derive_more::{Deref, Display, Into};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub id: SetID,
    pub weight: Weight,
    pub reps: Reps,
}

impl Set {
    #[must_use]
    pub fn update(&self, update: SetUpdate) -> Self {
        Self {
            id: self.id,
            weight: update.weight.unwrap_or(self.weight),
            reps: update.reps.unwrap_or(self.reps),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSet {
    pub weight: Weight,
    pub reps: Reps,
}

impl NewSet {
    #[must_use]
    pub fn into_set(self, id: SetID) -> Set {
        Set {
            id,
            weight: self.weight,
            reps: self.reps,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SetUpdate {
    pub weight: Option<Weight>,
    pub reps: Option<Reps>,
}

#[derive(Deref, Debug, Display, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetID(Uuid);

impl SetID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Weight in kg.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f32")]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() || value < 0.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

/// Missing or invalid stored weights are read as 0 kg.
impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<f32>::deserialize(deserializer)?;
        match value.map(Weight::new) {
            Some(Ok(weight)) => Ok(weight),
            _ => {
                warn!("replacing invalid stored weight {value:?} by 0");
                Ok(Weight(0.0))
            }
        }
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a non-negative number of kg")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u32")]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value == 0 {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

/// Stored reps are kept even if zero. Missing, negative or fractional values are read as 0.
impl<'de> Deserialize<'de> for Reps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?;
        match value {
            Some(v) if v.fract().abs() < f64::EPSILON && (0.0..=f64::from(u32::MAX)).contains(&v) => {
                if v < 1.0 {
                    warn!("stored reps are 0");
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let reps = v as u32;
                Ok(Reps(reps))
            }
            _ => {
                warn!("replacing invalid stored reps {value:?} by 0");
                Ok(Reps(0))
            }
        }
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be 1 or more")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}
