//! Patterns shared by many fields

/// Printable single-line text (tabs allowed)
pub const SINGLE_LINE: &str = r"[\t\x{20}-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}]*";

/// Printable text, line breaks allowed
pub const MULTI_LINE: &str = r"[\t\r\n\x{20}-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}]*";

/// Glue version such as `1.0` or `2.0`
pub const GLUE_VERSION: &str = r"\w+\.\w+";

/// IAM role ARN
pub const ROLE_ARN: &str = r"arn:aws:iam::\d{12}:role/.*";
