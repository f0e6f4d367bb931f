//! Transcript of the default lesson.

use crate::common::{REFERENCE_TRANSCRIPT, default_lines, run_to_string};
use cviceni_core::LessonConfig;

#[test]
fn test_full_transcript_matches_reference() {
    let text = run_to_string(&LessonConfig::default()).unwrap();
    assert_eq!(text, REFERENCE_TRANSCRIPT);
}

#[test]
fn test_power_line() {
    let lines = default_lines();
    assert_eq!(lines[0], "Aplikace pro mocnění");
    assert_eq!(lines[1], "Mocnina 5 na 2 = 25");
}

#[test]
fn test_name_list_renderings() {
    let lines = default_lines();
    assert_eq!(lines[3], "Seznam jmen: Pepa,Karel,Mirek,Kryštof");
    assert_eq!(lines[4], "Jméno na pozici 1 = Karel");
    assert_eq!(lines[5], "Seznam jmen: Pepa,Karel,Mirek,Kryštof,Jirka");
    assert_eq!(lines[6], "Seznam jmen: Karel,Mirek,Kryštof,Jirka");
    assert_eq!(lines[7], "Seznam jmen: Mirek,Kryštof,Jirka");
}

#[test]
fn test_student_lines_in_insertion_order() {
    let lines = default_lines();
    assert_eq!(&lines[8..11], ["Jan", "Petr", "Novák"]);
    assert_eq!(
        &lines[11..15],
        [
            "Student: Jan Novák, věk: 20",
            "Student: Petr Svoboda, věk: 22",
            "Student: Karel Černý, věk: 19",
            "Student: Mirek Procházka, věk: 21",
        ]
    );
}

#[test]
fn test_roster_count_and_final_description() {
    let lines = default_lines();
    assert_eq!(lines[15], "Počet studentů: 6");
    assert_eq!(lines[16], "Student: Jan Novák, věk: 20");
    assert_eq!(lines.len(), 17);
}

#[test]
fn test_lesson_is_repeatable() {
    let config = LessonConfig::default();
    assert_eq!(
        run_to_string(&config).unwrap(),
        run_to_string(&config).unwrap()
    );
}
