/// Placeholder shown for a plan without a name
pub const DEFAULT_DISPLAY_NAME: &str = "Anonymous";

/// Defaults substituted when a shared link omits a field or carries garbage
pub const DEFAULT_START_AGE: u32 = 22;
pub const DEFAULT_MONTHLY_SALARY: i64 = 30_000;
pub const DEFAULT_MONTHLY_SAVINGS: i64 = 5_000;
pub const DEFAULT_RETIRE_AGE: u32 = 60;
pub const DEFAULT_MONTHLY_EXPENSE: i64 = 20_000;
pub const DEFAULT_LIFE_EXPECTANCY: u32 = 80;

/// Months per year used by every duration conversion
pub const MONTHS_PER_YEAR: u32 = 12;

/// Directory the built-in avatars are served from
pub const AVATAR_DIR: &str = "/avatar";

/// Built-in avatar names, in picker order
pub const BUILTIN_AVATARS: [&str; 8] = [
    "Adam", "Albert", "Jackson", "James", "Maria", "Mavis", "Selma", "Tisha",
];

/// Avatar used when a shared link has none
pub const DEFAULT_AVATAR: &str = "/avatar/Tisha.png";

/// Path of a built-in avatar image, e.g. `/avatar/Adam.png`.
pub fn avatar_path(name: &str) -> String {
    format!("{}/{}.png", AVATAR_DIR, name)
}

/// Whether an avatar reference points at one of the built-in images.
pub fn is_builtin_avatar(avatar_ref: &str) -> bool {
    BUILTIN_AVATARS
        .iter()
        .any(|name| avatar_path(name) == avatar_ref)
}
