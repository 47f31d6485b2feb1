// Frame pacing: one simulation tick per rendered frame at ~60 fps
pub const FRAME_INTERVAL_MS: u64 = 16;

// Input poll timeout inside the game loop; short so flaps land between ticks
pub const INPUT_POLL_MS: u64 = 10;

// Input poll timeout on static screens (menu, rules, leaderboard)
pub const MENU_POLL_MS: u64 = 50;
