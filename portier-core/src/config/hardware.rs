//! Hardware geometry and link settings

/// Visible characters per display line
pub const DISPLAY_COLUMNS: usize = 16;

/// Badge reader link speed (8N1)
pub const SERIAL_BAUDRATE: u32 = 9600;
