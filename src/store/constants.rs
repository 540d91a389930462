/// Recognized type keywords. The trailing space matters: without it a key
/// name that merely starts with a keyword would count as a declaration.
pub const TYPE_TOKENS: [&str; 4] = ["int ", "float ", "string ", "bool "];

pub const ASSIGNMENT_CHARS: [char; 2] = ['=', ':'];

/// Case-insensitive spellings accepted for boolean values.
pub const TRUE_TOKENS: [&str; 6] = ["true", "yes", "y", "on", "1", "right"];
pub const FALSE_TOKENS: [&str; 6] = ["false", "no", "n", "off", "0", "wrong"];

/// Whitespace stripped from both ends of lines, keys and values: space, tab,
/// newline, carriage return, vertical tab and form feed.
pub const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\u{b}', '\u{c}'];
