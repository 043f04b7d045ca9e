/// Full heuristic decode command.
pub mod decode;
/// Root header inspection command.
pub mod header;
/// Byte-window frequency command.
pub mod patterns;
/// Printable string listing command.
pub mod strings;
/// Shared CLI helpers.
pub mod util;
