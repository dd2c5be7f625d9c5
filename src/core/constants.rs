// Street dimensions
pub const STREET_WIDTH: usize = 80;
pub const STREET_HEIGHT: usize = 12;

// Tick timing
pub const INITIAL_TICK_INTERVAL_MS: u64 = 1000;
pub const WIN_INTERVAL_STEP_MS: u64 = 200;
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

// Street is advanced this many times per column before play starts
pub const WARMUP_PASSES_PER_COLUMN: usize = 3;

// Lookahead window read when generating a new entry cell
pub const LOOKAHEAD_CELLS: usize = 5;

// Percentage used when the lookahead window cannot be read
pub const FALLBACK_OCCUPANCY_PERCENT: u8 = 35;

// Collision pause before the loss reset is applied
pub const LOSS_GRACE_MS: u64 = 50;

// Render pacing (~60 FPS)
pub const FRAME_INTERVAL_MS: u64 = 16;

// Wall flash frames: tint, plain, tint, plain
pub const FLASH_TINT_MS: u64 = 1000 / 7;
pub const FLASH_PLAIN_MS: u64 = 1000 / 10;

// Screen layout: grid origin and wall offset in terminal cells
pub const GRID_OFFSET: u16 = 2;
pub const WALL_OFFSET: u16 = 1;
pub const LEVEL_LABEL_COLUMN: u16 = 3;

// Command queue depth between the input reader and the command consumer
pub const COMMAND_QUEUE_DEPTH: usize = 64;

// Exit status used for the quit command
pub const QUIT_EXIT_CODE: i32 = 1;
