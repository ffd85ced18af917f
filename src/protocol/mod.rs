//! Protocol Module
//!
//! Defines the beanstalkd text protocol as spoken by the client.
//!
//! ## Protocol Format
//!
//! Every exchange is one command line, an optional data block, one reply
//! line and an optional data block. All lines end in `\r\n`.
//!
//! ### Commands
//! | Command  | Sent                                    | Success reply            |
//! |----------|-----------------------------------------|--------------------------|
//! | quit     | `quit \r\n`                             | none awaited             |
//! | watch    | `watch <tube>\r\n`                      | `WATCHING <count>\r\n`   |
//! | use      | `use <tube>\r\n`                        | `USING <tube>\r\n`       |
//! | put      | `put <pri> <delay> <ttr> <len>\r\n<data>\r\n` | `INSERTED <id>\r\n` |
//! | delete   | `delete <id>\r\n`                       | `DELETED\r\n`            |
//! | reserve  | `reserve\r\n`                           | `RESERVED <id> <len>\r\n<data>\r\n` |
//! | bury     | `bury <id> <pri>\r\n`                   | `BURIED\r\n`             |
//! | release  | `release <id> <pri> <delay>\r\n`        | `RELEASED\r\n`           |
//! | kick-job | `kick-job <id>\r\n`                     | `KICKED\r\n`             |
//! | kick     | `kick <bound>\r\n`                      | `KICKED <count>\r\n`     |
//!
//! ### Error Replies
//! `OUT_OF_MEMORY`, `INTERNAL_ERROR`, `BAD_FORMAT`, `UNKNOWN_COMMAND`,
//! `BURIED`, `EXPECTED_CRLF`, `JOB_TOO_BIG`, `DRAINING`, `DEADLINE_SOON`,
//! `TIMED_OUT`, `NOT_FOUND`

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::{
    literal, scan_fields, ReservedHeader, BURIED, DELETED, INSERTED, KICKED, RELEASED, RESERVED,
    USING, WATCHING,
};
pub use codec::{classify_error, encode_command, read_line, read_payload, CRLF};
