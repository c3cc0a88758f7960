// Library root
// -----------
// The binary (`main.rs`) parses arguments and hands off to these modules.
//
// Module responsibilities:
// - `links`: The links file data model and the in-memory edits (add,
//   edit, remove, reorder). No I/O, so it is covered by unit tests.
// - `store`: Loading and saving the JSON file.
// - `git`: Stages, commits and pushes the file via the `git` binary.
// - `ui`: The `dialoguer` menu flows that tie the above together.
// - `cli`: Command-line arguments.
// - `error`: Typed errors for the link edits and git steps.
pub mod cli;
pub mod error;
pub mod git;
pub mod links;
pub mod store;
pub mod ui;
