//! The lesson: a fixed sequence of computations, each followed by a print.

use crate::config::LessonConfig;
use crate::error::{Error, Result};
use crate::types::{NameList, Student, format_number, power};
use std::io::Write;

/// Runs the lesson, writing its transcript line by line to `out`.
///
/// The steps run in order with no branching; the first error (an
/// out-of-range position in the config, or a failed write) aborts the run.
///
/// # Examples
///
/// ```
/// use cviceni_core::{LessonConfig, run_lesson};
///
/// let mut out = Vec::new();
/// run_lesson(&LessonConfig::default(), &mut out).unwrap();
/// let transcript = String::from_utf8(out).unwrap();
/// assert!(transcript.starts_with("Aplikace pro mocnění\nMocnina 5 na 2 = 25\n"));
/// ```
pub fn run_lesson<W: Write>(config: &LessonConfig, out: &mut W) -> Result<()> {
    tracing::debug!("Starting lesson");

    print_power(config, out)?;

    writeln!(out, "{}", config.greeting)?;

    print_names(config, out)?;

    let students = print_students(config, out)?;

    tracing::debug!(count = config.roster.len(), "Roster built");
    writeln!(out, "Počet studentů: {}", config.roster.len())?;

    let first = student_at(&students, 0)?;
    writeln!(out, "{}", first.describe())?;

    tracing::debug!("Lesson finished");
    Ok(())
}

/// Step 1: power computation.
fn print_power<W: Write>(config: &LessonConfig, out: &mut W) -> Result<()> {
    let result = power(config.base, config.exponent);
    tracing::debug!(base = config.base, exponent = config.exponent, result, "Computed power");

    writeln!(out, "Aplikace pro mocnění")?;
    writeln!(
        out,
        "Mocnina {} na {} = {}",
        config.base,
        config.exponent,
        format_number(result)
    )?;
    Ok(())
}

/// Step 3: build the name list and print it after every mutation.
fn print_names<W: Write>(config: &LessonConfig, out: &mut W) -> Result<()> {
    let mut names = NameList::new(config.names.iter().cloned());

    writeln!(out, "Seznam jmen: {names}")?;
    writeln!(
        out,
        "Jméno na pozici {} = {}",
        config.lookup_index,
        names.get(config.lookup_index)?
    )?;

    names.push(config.appended.as_str());
    writeln!(out, "Seznam jmen: {names}")?;

    names.remove_at(config.removed_index)?;
    writeln!(out, "Seznam jmen: {names}")?;

    names.remove(&config.removed_name);
    writeln!(out, "Seznam jmen: {names}")?;
    Ok(())
}

/// Steps 4 and 5: print selected fields, then one line per student.
///
/// Returns the students in insertion order.
fn print_students<W: Write>(config: &LessonConfig, out: &mut W) -> Result<Vec<Student>> {
    let first = student_at(&config.students, 0)?;
    let second = student_at(&config.students, 1)?;

    writeln!(out, "{}", first.given_name)?;
    writeln!(out, "{}", second.given_name)?;
    writeln!(out, "{}", first.family_name)?;

    let students = config.students.clone();

    for student in &students {
        writeln!(out, "{student}")?;
    }
    Ok(students)
}

fn student_at(students: &[Student], index: usize) -> Result<&Student> {
    students
        .get(index)
        .ok_or_else(|| Error::index_out_of_range(index, students.len()))
}
