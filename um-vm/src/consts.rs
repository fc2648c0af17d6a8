//! Interpreter constants

use um_asm::Platter;

/// Number of general-purpose registers.
pub const VM_REGISTER_COUNT: usize = 8;

/// Identifier of the program array. Never issued by allocation once the
/// scroll has claimed it.
pub const PROGRAM_ID: Platter = 0;

/// Capacity of the output backlog ring, in bytes.
pub const BACKLOG_CAPACITY: usize = 4096;

/// Capacity of the paste ring, in bytes.
pub const PASTE_CAPACITY: usize = 1024 * 1024;

/// Terminal byte that drops from a running program into the console.
pub const CONSOLE_ESCAPE: u8 = b'!';

/// Leading bytes of every snapshot file.
pub const SNAPSHOT_MAGIC: [u8; 4] = *b"UMX\x01";

/// Snapshot path used when a console command omits one.
pub const SNAPSHOT_DEFAULT_PATH: &str = "snapshot.umx";

/// Scroll path used when `-f` is omitted.
pub const SCROLL_DEFAULT_PATH: &str = "umix.um";
