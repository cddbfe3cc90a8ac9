use vocab_core::Error;
use vocab_core::model::{Lesson, LessonId, UnitId, Word, WordId};

pub const DEMO_UNIT_ID: &str = "demo";

const WORDS: [(&str, &str, &str, &str, &str, &str); 4] = [
    (
        "w-otter",
        "otter",
        "/ˈɒtə/",
        "a semi-aquatic mammal with thick fur that eats fish",
        "An otter floated on its back, cracking a shell on its chest.",
        "noun",
    ),
    (
        "w-heron",
        "heron",
        "/ˈhɛrən/",
        "a long-legged wading bird with a long neck and pointed bill",
        "A grey heron stood motionless in the shallows.",
        "noun",
    ),
    (
        "w-burrow",
        "burrow",
        "/ˈbʌrəʊ/",
        "to dig a hole or tunnel, especially to live in",
        "Rabbits burrow into the soft bank of the river.",
        "verb",
    ),
    (
        "w-nocturnal",
        "nocturnal",
        "/nɒkˈtɜːnəl/",
        "active at night rather than during the day",
        "Owls are nocturnal hunters.",
        "adjective",
    ),
];

/// Built-in lesson served by `--demo`, so the UI runs without a backend.
pub fn demo_lesson() -> Result<(UnitId, Lesson), Error> {
    let unit = UnitId::new(DEMO_UNIT_ID)?;
    let words = WORDS
        .iter()
        .map(|(id, word, pronunciation, definition, example, pos)| -> Result<Word, Error> {
            Ok(Word::new(
                WordId::new(*id)?,
                *word,
                *pronunciation,
                *definition,
                *example,
                *pos,
            ))
        })
        .collect::<Result<Vec<_>, Error>>()?;
    let lesson = Lesson::new(LessonId::new("lesson-demo"), "Animals", words)?;
    Ok((unit, lesson))
}
