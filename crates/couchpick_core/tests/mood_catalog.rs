use couchpick_core::{genres_for_mood, known_moods, MoodError};

#[test]
fn mood_table_matches_fixed_configuration() {
    let expected: Vec<(&str, Vec<&str>)> = vec![
        ("Happy", vec!["Comedy", "Family"]),
        ("Sad", vec!["Drama", "Romance"]),
        ("Adventurous", vec!["Action", "Adventure"]),
        ("Romantic", vec!["Romance", "Drama"]),
        ("Thrilled", vec!["Thriller", "Action", "Horror"]),
        ("Cozy", vec!["Family", "Romance"]),
        ("Weird", vec!["Sci-Fi & Fantasy", "Documentary"]),
        ("Binge Mode", vec!["TV Shows", "Drama"]),
        ("Animated Fun", vec!["Animation", "Anime"]),
        ("Mind Blown", vec!["Science & Nature TV", "Sci-Fi & Fantasy"]),
    ];

    let moods: Vec<&str> = known_moods().collect();
    assert_eq!(
        moods,
        expected.iter().map(|(mood, _)| *mood).collect::<Vec<_>>()
    );

    for (mood, genres) in expected {
        let resolved = genres_for_mood(mood).expect("fixed mood should resolve");
        assert_eq!(resolved, genres.as_slice(), "genre set for `{mood}`");
    }
}

#[test]
fn unknown_mood_is_rejected_with_label() {
    let err = genres_for_mood("Melancholic").unwrap_err();
    assert!(matches!(err, MoodError::UnknownMood(ref mood) if mood == "Melancholic"));
    assert!(err.to_string().contains("Melancholic"));
}
