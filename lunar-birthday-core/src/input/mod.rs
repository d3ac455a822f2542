//! Reading birthday requests from a console or from a batch file.

mod batch;
mod interactive;

pub use batch::{parse_batch, parse_line, read_batch_file, BatchRecord, BATCH_FORMAT_HELP};
pub use interactive::{Mode, Prompter};
