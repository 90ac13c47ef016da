use eframe::egui::{RichText, Ui};

use crate::color::{cycle, generate_palette};

const MIN_FONT: f32 = 11.0;
const MAX_FONT: f32 = 48.0;

// ---------------------------------------------------------------------------
// Word cloud
// ---------------------------------------------------------------------------

/// Lay the words out in wrapped rows, sized by frequency.
///
/// `words` is expected largest first, as returned by `most_frequent`.
pub fn word_cloud(ui: &mut Ui, words: &[(String, usize)]) {
    if words.is_empty() {
        ui.label("No title words to show.");
        return;
    }

    let max = words.iter().map(|(_, c)| *c).max().unwrap_or(1);
    let min = words.iter().map(|(_, c)| *c).min().unwrap_or(1);
    let palette = generate_palette(8);

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 10.0;
        for (i, (word, count)) in words.iter().enumerate() {
            let text = RichText::new(word)
                .size(font_size(*count, min, max))
                .color(cycle(&palette, i));
            ui.label(text).on_hover_text(format!("{word}: {count}"));
        }
    });
}

/// Linear interpolation between the smallest and largest font size.
fn font_size(count: usize, min: usize, max: usize) -> f32 {
    if max <= min {
        return MAX_FONT;
    }
    let t = (count.saturating_sub(min)) as f32 / (max - min) as f32;
    MIN_FONT + t * (MAX_FONT - MIN_FONT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_spans_the_range() {
        assert_eq!(font_size(1, 1, 9), MIN_FONT);
        assert_eq!(font_size(9, 1, 9), MAX_FONT);
        let mid = font_size(5, 1, 9);
        assert!(mid > MIN_FONT && mid < MAX_FONT);
    }

    #[test]
    fn single_count_uses_the_largest_font() {
        assert_eq!(font_size(3, 3, 3), MAX_FONT);
    }
}
