use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::classify::ClassifiedLine;

/// An inline directive controlling whether lines reach the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pragma {
    /// Drop this single line.
    Exclude,
    /// Begin a suppressed region; the directive line is suppressed too.
    StartExclude,
    /// End a suppressed region, suppressing the directive line itself.
    EndExclude,
}

/// Find a handout pragma in a line, written as a trailing comment such as
/// `# handout: exclude`. Tags are case-insensitive.
pub fn pragma(text: &str) -> Option<Pragma> {
    static PRAGMA_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = PRAGMA_REGEX.get_or_init(|| {
        Regex::new(r"(?i)#\s*handout:\s*(start-exclude|end-exclude|exclude)")
            .expect("Invalid pragma regex")
    });
    let tag = re.captures(text)?.get(1)?.as_str();
    match tag.to_ascii_lowercase().as_str() {
        "exclude" => Some(Pragma::Exclude),
        "start-exclude" => Some(Pragma::StartExclude),
        "end-exclude" => Some(Pragma::EndExclude),
        _ => None,
    }
}

/// Drop lines per their pragmas, keeping original line numbers.
///
/// `exclude` drops only its own line. `start-exclude` suppresses lines
/// from the directive line up to and including the next `end-exclude`
/// line. Regions do not nest: the state is one boolean, so a stray
/// `end-exclude` while already including keeps including (and, carrying
/// no region to close, its line passes through).
pub fn filter_pragmas(lines: BTreeMap<u32, ClassifiedLine>) -> BTreeMap<u32, ClassifiedLine> {
    let mut kept = BTreeMap::new();
    let mut including = true;
    for (number, line) in lines {
        match pragma(&line.text) {
            Some(Pragma::Exclude) => continue,
            Some(Pragma::StartExclude) => including = false,
            Some(Pragma::EndExclude) => {
                if including {
                    kept.insert(number, line);
                }
                including = true;
                continue;
            }
            None => {}
        }
        if including {
            kept.insert(number, line);
        }
    }
    kept
}
