use chrono::Utc;
use zipprat_domain::{
    AppState, ExerciseID, ExerciseUpdate, MuscleGroup, Name, NewExercise, NewSet, NewWorkout,
    SetID, SetUpdate, WorkoutID, WorkoutUpdate, WriteError,
};

use crate::{KeyValueRepository, PersistedState, Theme};

pub const STORAGE_KEY: &str = "zipprat-gym-tracker";

/// Handle to the persisted application state.
pub struct App<R> {
    state: PersistedState<AppState, R>,
}

impl<R: KeyValueRepository> App<R> {
    pub fn new(repository: R) -> Self {
        let app = Self {
            state: PersistedState::new(repository, STORAGE_KEY, AppState::default()),
        };
        #[cfg(target_arch = "wasm32")]
        crate::apply_theme(app.theme());
        app
    }

    pub fn state(&self) -> &AppState {
        self.state.get()
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.state().dark_mode)
    }

    /// Toggles the display mode and, in the browser, applies the resulting theme to the document.
    pub fn toggle_dark_mode(&mut self) -> Result<(), WriteError> {
        self.state.update(AppState::toggle_dark_mode)?;
        #[cfg(target_arch = "wasm32")]
        crate::apply_theme(self.theme());
        Ok(())
    }

    pub fn add_workout(&mut self, workout: NewWorkout) -> Result<(), WriteError> {
        self.state.update(|state| state.add_workout(workout))
    }

    /// Adds a workout dated at the current time.
    pub fn add_workout_now(
        &mut self,
        name: Name,
        muscle_group: MuscleGroup,
    ) -> Result<(), WriteError> {
        self.add_workout(NewWorkout {
            name,
            muscle_group,
            date: Utc::now(),
        })
    }

    pub fn update_workout(&mut self, id: WorkoutID, update: WorkoutUpdate) -> Result<(), WriteError> {
        self.state.update(|state| state.update_workout(id, update))
    }

    pub fn delete_workout(&mut self, id: WorkoutID) -> Result<(), WriteError> {
        self.state.update(|state| state.delete_workout(id))
    }

    pub fn add_exercise(
        &mut self,
        workout_id: WorkoutID,
        exercise: NewExercise,
    ) -> Result<(), WriteError> {
        self.state
            .update(|state| state.add_exercise(workout_id, exercise))
    }

    pub fn update_exercise(
        &mut self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        update: ExerciseUpdate,
    ) -> Result<(), WriteError> {
        self.state
            .update(|state| state.update_exercise(workout_id, exercise_id, update))
    }

    pub fn delete_exercise(
        &mut self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
    ) -> Result<(), WriteError> {
        self.state
            .update(|state| state.delete_exercise(workout_id, exercise_id))
    }

    pub fn add_set(
        &mut self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        set: NewSet,
    ) -> Result<(), WriteError> {
        self.state
            .update(|state| state.add_set(workout_id, exercise_id, set))
    }

    pub fn update_set(
        &mut self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        set_id: SetID,
        update: SetUpdate,
    ) -> Result<(), WriteError> {
        self.state
            .update(|state| state.update_set(workout_id, exercise_id, set_id, update))
    }

    pub fn delete_set(
        &mut self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        set_id: SetID,
    ) -> Result<(), WriteError> {
        self.state
            .update(|state| state.delete_set(workout_id, exercise_id, set_id))
    }

    pub fn into_repository(self) -> R {
        self.state.into_repository()
    }
}
