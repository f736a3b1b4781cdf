use std::fmt;

const LOCATION_SEPARATOR: char = '\t';
const ANNOTATION_OPEN: char = '{';
const ANNOTATION_CLOSE: char = '}';
/// Byte distance from `(` to `)` in a `(YYYY)` group.
const YEAR_GROUP_SPAN: usize = 5;

/// Title and location split out of one dataset line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub title: &'a str,
    pub location: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No brace annotation and the first parenthesis group is not `(YYYY)`.
    YearGroupNotFound,
    /// No tab between the year group and the location.
    MissingLocationSeparator,
    EmptyTitle,
    EmptyLocation,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::YearGroupNotFound => "first parenthesis group is not a 4-character year",
            Self::MissingLocationSeparator => "no tab before the location",
            Self::EmptyTitle => "empty title",
            Self::EmptyLocation => "empty location",
        };
        f.write_str(reason)
    }
}

/// Splits a selected dataset line into title and location.
///
/// Lines carrying an episode annotation (`{...}`) keep everything up to the
/// closing brace as their title. Other lines are cut just before the first
/// parenthesis, which must open a 4-character year group; a title that itself
/// contains such a group earlier on is cut there instead.
pub fn parse_line(line: &str) -> Result<ParsedLine<'_>, SkipReason> {
    let (title, location) = match annotation_end(line) {
        Some(close) => {
            let location = line[close + 1..].trim_matches(|c| matches!(c, '\t' | '\n' | '\r'));
            (line[..=close].trim(), location)
        }
        None => {
            let open = line.find('(').ok_or(SkipReason::YearGroupNotFound)?;
            let close = open + YEAR_GROUP_SPAN;
            if line[open..].find(')') != Some(YEAR_GROUP_SPAN) {
                return Err(SkipReason::YearGroupNotFound);
            }

            let rest = &line[close + 1..];
            let tab = rest
                .find(LOCATION_SEPARATOR)
                .ok_or(SkipReason::MissingLocationSeparator)?;
            let location = rest[tab + 1..].trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));

            (line[..open].trim(), location)
        }
    };

    if title.is_empty() {
        return Err(SkipReason::EmptyTitle);
    }
    if location.is_empty() {
        return Err(SkipReason::EmptyLocation);
    }

    Ok(ParsedLine { title, location })
}

/// Byte index of the `}` closing the first brace annotation, if any.
fn annotation_end(line: &str) -> Option<usize> {
    let open = line.find(ANNOTATION_OPEN)?;
    line[open..].find(ANNOTATION_CLOSE).map(|offset| open + offset)
}
