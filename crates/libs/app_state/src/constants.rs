/// Built-in settings, layered underneath any user supplied config file.
pub const DEFAULT_SETTINGS: &str = include_str!("../../../../config/settings.yaml");
