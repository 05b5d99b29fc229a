use crate::character_lookup::domain::{DerivedTag, TagColor};
use owo_colors::OwoColorize;

/// Renders tags as one space-separated line of colored `[label]` badges.
///
/// Colors are applied only when `colored` is set, so callers can honor
/// `NO_COLOR` or a non-terminal stderr.
pub fn colored_tag_line<'a, I>(tags: I, colored: bool) -> String
where
    I: IntoIterator<Item = &'a DerivedTag>,
{
    tags.into_iter()
        .map(|tag| {
            let badge = format!("[{}]", tag.label);
            if !colored {
                return badge;
            }
            match tag.color {
                TagColor::Green => badge.green().to_string(),
                TagColor::Red => badge.red().to_string(),
                TagColor::Cyan => badge.cyan().to_string(),
                TagColor::Blue => badge.blue().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
