use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_until},
    character::complete::anychar,
    combinator::recognize,
    sequence::{pair, preceded, terminated},
};

/// Prefix that opens a new file block in `git diff` output
pub const FILE_HEADER_PREFIX: &str = "diff --git";

/// Filename used when a file header does not follow the `a/<path> b/` layout
pub const UNKNOWN_FILENAME: &str = "unknown";

/// Whether `line` opens a new file block
pub fn is_file_header(line: &str) -> bool {
    line.starts_with(FILE_HEADER_PREFIX)
}

/// Extract the path from a `diff --git a/<path> b/<path>` header.
///
/// The path is the shortest non-empty run of characters after `a/` that is
/// followed by ` b/`. Anything after that separator is ignored, so renames
/// report their old path.
///
/// Returns `None` for headers that do not match, e.g. `diff --git weird-format`.
pub fn parse_header_path(line: &str) -> Option<&str> {
    header_path(line).ok().map(|(_, path)| path)
}

fn header_path(input: &str) -> IResult<&str, &str> {
    preceded(
        tag("diff --git a/"),
        terminated(recognize(pair(anychar, take_until(" b/"))), tag(" b/")),
    )
    .parse(input)
}
