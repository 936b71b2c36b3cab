use derive_more::{Deref, Display};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Name, NewSet, Set, SetID, SetUpdate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub sets: Vec<Set>,
}

impl Exercise {
    #[must_use]
    pub fn set(&self, id: SetID) -> Option<&Set> {
        self.sets.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn update(&self, update: ExerciseUpdate) -> Self {
        Self {
            id: self.id,
            name: update.name.unwrap_or_else(|| self.name.clone()),
            sets: self.sets.clone(),
        }
    }

    #[must_use]
    pub fn add_set(&self, id: SetID, set: NewSet) -> Self {
        let mut sets = self.sets.clone();
        sets.push(set.into_set(id));
        Self {
            id: self.id,
            name: self.name.clone(),
            sets,
        }
    }

    #[must_use]
    pub fn update_set(&self, id: SetID, update: SetUpdate) -> Self {
        let Some(position) = self.sets.iter().position(|s| s.id == id) else {
            debug!("set {id} not found in exercise {}", self.id);
            return self.clone();
        };
        let mut sets = self.sets.clone();
        sets[position] = self.sets[position].update(update);
        Self {
            id: self.id,
            name: self.name.clone(),
            sets,
        }
    }

    #[must_use]
    pub fn delete_set(&self, id: SetID) -> Self {
        let sets = self
            .sets
            .iter()
            .filter(|s| s.id != id)
            .cloned()
            .collect::<Vec<_>>();
        if sets.len() == self.sets.len() {
            debug!("set {id} not found in exercise {}", self.id);
        }
        Self {
            id: self.id,
            name: self.name.clone(),
            sets,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub name: Name,
}

impl NewExercise {
    #[must_use]
    pub fn into_exercise(self, id: ExerciseID) -> Exercise {
        Exercise {
            id,
            name: self.name,
            sets: vec![],
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExerciseUpdate {
    pub name: Option<Name>,
}

#[derive(Deref, Debug, Display, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
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

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
