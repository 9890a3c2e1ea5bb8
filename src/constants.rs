//! Constants used throughout the application
//!
//! This module centralizes UI text, key hints and layout limits.

// Component titles
pub const TITLE_PAGINATION: &str = " Pagination ";
pub const TITLE_DATE_PICKER: &str = " Date picker ";
pub const TITLE_ACCORDION: &str = " Accordion ";
pub const TITLE_INPUT: &str = " Input ";
pub const TITLE_CARD: &str = " Card ";
pub const TITLE_LOADING: &str = " Loading ";
pub const TITLE_LOGS: &str = " Logs - Esc to close ";

// Placeholders and labels
pub const DATE_PICKER_PLACEHOLDER: &str = "Pick a date";
pub const INPUT_PLACEHOLDER: &str = "Type here";
pub const LOADING_TEXT: &str = "Loading...";
pub const PAGE_LOADING_TEXT: &str = "Loading page...";
pub const CLEAR_MARKER: &str = "×";
pub const PASSWORD_MASK: char = '•';
pub const ELLIPSIS: &str = "…";

// Status bar hints
pub const STATUS_HINTS: &str = "Tab: next demo • m: modal • L: logs • q: quit";
pub const HINT_PAGINATION: &str = "←/→ page • Home/End first/last";
pub const HINT_DATE_PICKER: &str = "Enter open/pick • arrows move • [ ] month • { } year • Esc close";
pub const HINT_ACCORDION: &str = "↑/↓ focus • Enter toggle";
pub const HINT_INPUT: &str = "Enter edit/done • Ctrl+U clear • Ctrl+R show password • p: password mode";
pub const HINT_CARD: &str = "v: variant • p: padding";
pub const HINT_LOADING: &str = "v: variant • s: size • Space: start/stop • f: full screen";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Layout and timing limits
/// Minimum event loop tick interval in milliseconds
pub const TICK_RATE_MIN_MS: u64 = 16;
/// Maximum event loop tick interval in milliseconds
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Default event loop tick interval in milliseconds
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
/// Upper bound on siblings shown around the current page
pub const SIBLING_COUNT_MAX: u32 = 10;
