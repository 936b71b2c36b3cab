use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Exercise, ExerciseID, ExerciseUpdate, Name, NewExercise};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub muscle_group: MuscleGroup,
    pub date: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    #[must_use]
    pub fn exercise(&self, id: ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn update(&self, update: WorkoutUpdate) -> Self {
        Self {
            id: self.id,
            name: update.name.unwrap_or_else(|| self.name.clone()),
            muscle_group: update.muscle_group.unwrap_or(self.muscle_group),
            date: update.date.unwrap_or(self.date),
            exercises: self.exercises.clone(),
        }
    }

    #[must_use]
    pub fn add_exercise(&self, id: ExerciseID, exercise: NewExercise) -> Self {
        let mut exercises = self.exercises.clone();
        exercises.push(exercise.into_exercise(id));
        self.with_exercises(exercises)
    }

    #[must_use]
    pub fn update_exercise(&self, id: ExerciseID, update: ExerciseUpdate) -> Self {
        self.replace_exercise(id, |exercise| exercise.update(update))
    }

    /// Replaces the exercise with the given ID by the result of `f`.
    ///
    /// All other exercises are kept as they are. If no such exercise exists, the workout is
    /// returned unchanged.
    #[must_use]
    pub fn replace_exercise(&self, id: ExerciseID, f: impl FnOnce(&Exercise) -> Exercise) -> Self {
        let Some(position) = self.exercises.iter().position(|e| e.id == id) else {
            debug!("exercise {id} not found in workout {}", self.id);
            return self.clone();
        };
        let mut exercises = self.exercises.clone();
        exercises[position] = f(&self.exercises[position]);
        self.with_exercises(exercises)
    }

    #[must_use]
    pub fn delete_exercise(&self, id: ExerciseID) -> Self {
        let exercises = self
            .exercises
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect::<Vec<_>>();
        if exercises.len() == self.exercises.len() {
            debug!("exercise {id} not found in workout {}", self.id);
        }
        self.with_exercises(exercises)
    }

    fn with_exercises(&self, exercises: Vec<Exercise>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            muscle_group: self.muscle_group,
            date: self.date,
            exercises,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub name: Name,
    pub muscle_group: MuscleGroup,
    pub date: DateTime<Utc>,
}

impl NewWorkout {
    #[must_use]
    pub fn into_workout(self, id: WorkoutID) -> Workout {
        Workout {
            id,
            name: self.name,
            muscle_group: self.muscle_group,
            date: self.date,
            exercises: vec![],
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutUpdate {
    pub name: Option<Name>,
    pub muscle_group: Option<MuscleGroup>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Deref, Debug, Display, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
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

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

// Older data stores the localized labels, which are still accepted when reading.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum MuscleGroup {
    #[default]
    #[serde(alias = "Pecho")]
    #[strum(to_string = "Chest", serialize = "Pecho")]
    Chest,
    #[serde(alias = "Espalda")]
    #[strum(to_string = "Back", serialize = "Espalda")]
    Back,
    #[serde(alias = "Piernas")]
    #[strum(to_string = "Legs", serialize = "Piernas")]
    Legs,
    #[serde(alias = "Hombros")]
    #[strum(to_string = "Shoulders", serialize = "Hombros")]
    Shoulders,
    #[serde(alias = "Brazos")]
    #[strum(to_string = "Arms", serialize = "Brazos")]
    Arms,
}
