// ABOUTME: Built-in exercise catalog seeded on first launch
// ABOUTME: Covers warm-up, mobility, legs, push, pull, core and conditioning movements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::{ExerciseDefinition, ExerciseType, MuscleGroup};

use ExerciseType::{Bodyweight, Cardio, Duration, Weighted};

/// `(id, name, group, type, description)`
type CatalogRow = (
    &'static str,
    &'static str,
    MuscleGroup,
    ExerciseType,
    Option<&'static str>,
);

const ROWS: &[CatalogRow] = &[
    (
        "ex_warmup",
        "Warm-up (Walk + Dynamic)",
        MuscleGroup::FullBody,
        Duration,
        Some("Five easy minutes of walking, faster for the last two. Finish with arm circles, hip rotations and light squats."),
    ),
    (
        "ex_mobility",
        "Mobility (Stretching)",
        MuscleGroup::FullBody,
        Duration,
        Some("Dynamic stretching for hip flexors, chest and hamstrings."),
    ),
    (
        "ex_squat",
        "Squat / Goblet Squat",
        MuscleGroup::Legs,
        Weighted,
        Some("Hold the weight at your chest, feet shoulder width apart. Sit back as if onto a chair with a straight back and drive up through the heels."),
    ),
    (
        "ex_lunges",
        "Lunges (Walking/Stationary)",
        MuscleGroup::Legs,
        Weighted,
        Some("Take a long step forward and lower the back knee almost to the floor. Keep the torso upright and push back to start."),
    ),
    ("ex_legpress", "Leg Press", MuscleGroup::Legs, Weighted, None),
    ("ex_stepup", "Box Step-ups", MuscleGroup::Legs, Weighted, None),
    (
        "ex_bridge",
        "Hip Thrust / Glute Bridge",
        MuscleGroup::Legs,
        Bodyweight,
        Some("Lie on your back with feet on the floor. Lift the hips by squeezing the glutes and hold for a second at the top."),
    ),
    (
        "ex_deadlift",
        "Deadlift (KB/Barbell)",
        MuscleGroup::Back,
        Weighted,
        Some("Stand with the weight between your feet. Hinge at the hips, brace, and stand up by driving the hips forward."),
    ),
    ("ex_rdl", "Romanian Deadlift", MuscleGroup::Legs, Weighted, None),
    (
        "ex_pushup",
        "Push-ups",
        MuscleGroup::Chest,
        Bodyweight,
        Some("Hands slightly wider than shoulders, body straight as a plank. Lower the chest to the floor and press up."),
    ),
    (
        "ex_bench",
        "Bench Press",
        MuscleGroup::Chest,
        Weighted,
        Some("Lower the bar under control to the chest and press until the arms are straight."),
    ),
    (
        "ex_press",
        "Shoulder Press",
        MuscleGroup::Shoulders,
        Weighted,
        Some("Press dumbbells or a bar from the shoulders straight overhead and lower under control."),
    ),
    ("ex_dips", "Dips", MuscleGroup::Arms, Bodyweight, None),
    ("ex_lateral", "Lateral Raise", MuscleGroup::Shoulders, Weighted, None),
    (
        "ex_row",
        "Bent-over Row",
        MuscleGroup::Back,
        Weighted,
        Some("Lean forward with a flat back and pull the weight toward the lower stomach, squeezing the shoulder blades."),
    ),
    (
        "ex_lat_row",
        "Lat Pulldown / Seated Row",
        MuscleGroup::Back,
        Weighted,
        Some("Pull the bar to the upper chest with elbows slightly out, then release slowly."),
    ),
    ("ex_facepull", "Face Pulls", MuscleGroup::Shoulders, Weighted, None),
    ("ex_back_ext", "Back Extension", MuscleGroup::Back, Bodyweight, None),
    ("ex_pullup", "Pull-ups", MuscleGroup::Back, Bodyweight, None),
    (
        "ex_plank",
        "Plank",
        MuscleGroup::Core,
        Duration,
        Some("Rest on elbows and toes with the body in a straight line. Brace the stomach and glutes without letting the lower back sag."),
    ),
    ("ex_sideplank", "Side Plank", MuscleGroup::Core, Duration, None),
    ("ex_deadbug", "Dead Bug", MuscleGroup::Core, Bodyweight, None),
    ("ex_russiantwist", "Russian Twist", MuscleGroup::Core, Bodyweight, None),
    (
        "ex_walk_int",
        "Interval Walking",
        MuscleGroup::Cardio,
        Cardio,
        Some("Alternate brisk walking with easy walking, for example one minute each."),
    ),
    ("ex_walk_fast", "Brisk Walking", MuscleGroup::Cardio, Cardio, None),
    ("ex_stairs", "Stair Intervals", MuscleGroup::Cardio, Cardio, None),
    ("ex_bike", "Cycling", MuscleGroup::Cardio, Cardio, None),
    ("ex_elliptical", "Elliptical Trainer", MuscleGroup::Cardio, Cardio, None),
    ("ex_row_machine", "Rowing Machine", MuscleGroup::Cardio, Cardio, None),
    ("ex_swim", "Swimming", MuscleGroup::Cardio, Cardio, None),
    ("ex_hike", "Hiking / Trail Walk", MuscleGroup::Cardio, Cardio, None),
];

/// Initial exercise catalog, sorted alphabetically by display name
#[must_use]
pub fn default_catalog() -> Vec<ExerciseDefinition> {
    let mut definitions: Vec<ExerciseDefinition> = ROWS
        .iter()
        .map(|&(id, name, group, exercise_type, description)| {
            let definition = ExerciseDefinition::new(id, name, group, exercise_type);
            match description {
                Some(text) => definition.with_description(text),
                None => definition,
            }
        })
        .collect();
    definitions.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    definitions
}
