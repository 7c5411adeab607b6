/// Encode an sRGB triple as a lowercase `#rrggbb` string.
///
/// Channels are already bounded to `0..=255` by their type, so callers only need to round their averages before
/// narrowing them into a `u8`.
pub fn encode((red, green, blue): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_each_channel_to_two_digits() {
        assert_eq!(encode((0, 0, 0)), "#000000");
        assert_eq!(encode((1, 2, 3)), "#010203");
        assert_eq!(encode((10, 10, 10)), "#0a0a0a");
    }

    #[test]
    fn uses_lowercase_digits() {
        assert_eq!(encode((255, 255, 255)), "#ffffff");
        assert_eq!(encode((255, 0, 0)), "#ff0000");
        assert_eq!(encode((0xab, 0xcd, 0xef)), "#abcdef");
    }
}
