/// Resolution of raw arguments into typed values.
///
/// Decides whether a word is a quoted string, a variable reference, an integer,
/// a boolean or a bare string, and groups multi-word quoted literals back
/// together. Every statement resolves its arguments through this module, so
/// `print` and `var` always agree on what a word means.
///
/// # Responsibilities
/// - Strips quotes from string literals.
/// - Applies the single precedence order used for every argument.
/// - Rejoins quoted literals that the whitespace lexer split apart.
pub mod coercion;
/// The executor runs recognized statements against a session.
///
/// It owns the variable store and the output writer, drives the line-by-line
/// loop, and implements both the stop-at-first-error run and the recovering
/// run.
pub mod executor;
/// The lexer splits source text into whitespace-separated words.
///
/// Built on `logos`, it tracks line numbers as it consumes newlines and hands
/// the executor one line at a time.
pub mod lexer;
/// Statement recognition.
///
/// Turns the words of one line into a `Statement`, rejecting unknown keywords
/// and malformed statement shapes before anything executes.
pub mod statement;
/// The variable store.
pub mod store;
/// The runtime value type and its truthiness rules.
pub mod value;
