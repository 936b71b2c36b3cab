use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Exercise, ExerciseID, ExerciseUpdate, NewExercise, NewSet, NewWorkout, Set, SetID, SetUpdate,
    Workout, WorkoutID, WorkoutUpdate,
};

/// The complete state of the application.
///
/// All operations leave `self` untouched and return the resulting state. Operations referring to
/// a workout, exercise or set that does not exist return an unchanged copy of the state.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Most recently created first.
    pub workouts: Vec<Workout>,
    pub dark_mode: bool,
}

impl AppState {
    #[must_use]
    pub fn workout(&self, id: WorkoutID) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn exercise(&self, workout_id: WorkoutID, exercise_id: ExerciseID) -> Option<&Exercise> {
        self.workout(workout_id)?.exercise(exercise_id)
    }

    #[must_use]
    pub fn set(
        &self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        set_id: SetID,
    ) -> Option<&Set> {
        self.exercise(workout_id, exercise_id)?.set(set_id)
    }

    #[must_use]
    pub fn add_workout(&self, workout: NewWorkout) -> Self {
        let mut workouts = Vec::with_capacity(self.workouts.len() + 1);
        workouts.push(workout.into_workout(WorkoutID::new()));
        workouts.extend(self.workouts.iter().cloned());
        self.with_workouts(workouts)
    }

    #[must_use]
    pub fn update_workout(&self, id: WorkoutID, update: WorkoutUpdate) -> Self {
        self.replace_workout(id, |workout| workout.update(update))
    }

    #[must_use]
    pub fn delete_workout(&self, id: WorkoutID) -> Self {
        let workouts = self
            .workouts
            .iter()
            .filter(|w| w.id != id)
            .cloned()
            .collect::<Vec<_>>();
        if workouts.len() == self.workouts.len() {
            debug!("workout {id} not found");
        }
        self.with_workouts(workouts)
    }

    #[must_use]
    pub fn add_exercise(&self, workout_id: WorkoutID, exercise: NewExercise) -> Self {
        self.replace_workout(workout_id, |workout| {
            workout.add_exercise(ExerciseID::new(), exercise)
        })
    }

    #[must_use]
    pub fn update_exercise(
        &self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        update: ExerciseUpdate,
    ) -> Self {
        self.replace_workout(workout_id, |workout| {
            workout.update_exercise(exercise_id, update)
        })
    }

    #[must_use]
    pub fn delete_exercise(&self, workout_id: WorkoutID, exercise_id: ExerciseID) -> Self {
        self.replace_workout(workout_id, |workout| workout.delete_exercise(exercise_id))
    }

    #[must_use]
    pub fn add_set(&self, workout_id: WorkoutID, exercise_id: ExerciseID, set: NewSet) -> Self {
        self.replace_workout(workout_id, |workout| {
            workout.replace_exercise(exercise_id, |exercise| {
                exercise.add_set(SetID::new(), set)
            })
        })
    }

    #[must_use]
    pub fn update_set(
        &self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        set_id: SetID,
        update: SetUpdate,
    ) -> Self {
        self.replace_workout(workout_id, |workout| {
            workout.replace_exercise(exercise_id, |exercise| {
                exercise.update_set(set_id, update)
            })
        })
    }

    #[must_use]
    pub fn delete_set(&self, workout_id: WorkoutID, exercise_id: ExerciseID, set_id: SetID) -> Self {
        self.replace_workout(workout_id, |workout| {
            workout.replace_exercise(exercise_id, |exercise| exercise.delete_set(set_id))
        })
    }

    #[must_use]
    pub fn set_dark_mode(&self, dark_mode: bool) -> Self {
        Self {
            workouts: self.workouts.clone(),
            dark_mode,
        }
    }

    #[must_use]
    pub fn toggle_dark_mode(&self) -> Self {
        self.set_dark_mode(!self.dark_mode)
    }

    fn replace_workout(&self, id: WorkoutID, f: impl FnOnce(&Workout) -> Workout) -> Self {
        let Some(position) = self.workouts.iter().position(|w| w.id == id) else {
            debug!("workout {id} not found");
            return self.clone();
        };
        let mut workouts = self.workouts.clone();
        workouts[position] = f(&self.workouts[position]);
        self.with_workouts(workouts)
    }

    fn with_workouts(&self, workouts: Vec<Workout>) -> Self {
        Self {
            workouts,
            dark_mode: self.dark_mode,
        }
    }
}
