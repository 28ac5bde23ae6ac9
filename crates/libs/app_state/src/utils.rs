use std::path::Path;

/// Lowercases an extension and strips a leading dot, so `.PNG` and `png` compare equal.
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

/// Checks whether `file` carries the given (already normalized) extension.
#[must_use]
pub fn has_extension(file: &Path, ext: &str) -> bool {
    file.extension()
        .is_some_and(|e| e.to_string_lossy().to_lowercase() == ext)
}

/// Checks for `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
#[must_use]
pub fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_normalized() {
        assert_eq!(normalize_extension(".PNG"), "png");
        assert_eq!(normalize_extension(" mp3 "), "mp3");
        assert!(has_extension(Path::new("clips/Boing.PNG"), "png"));
        assert!(!has_extension(Path::new("clips/boing.png.bak"), "png"));
        assert!(!has_extension(Path::new("clips/png"), "png"));
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#e8e8e8"));
        assert!(is_hex_color("#FFF"));
        assert!(is_hex_color("#e8e8e8ff"));
        assert!(!is_hex_color("e8e8e8"));
        assert!(!is_hex_color("#e8e8e"));
        assert!(!is_hex_color("#gggggg"));
    }
}
