//! Plain-text rendering for `--print` mode.

use std::fmt::Write;

use crate::model::Amphibian;

/// One block per record, separated by blank lines:
///
/// ```text
/// Axolotl (Salamander)
/// Image: http://x/a.png
/// Lives in lakes.
/// ```
pub fn render_cards(amphibians: &[Amphibian]) -> String {
    let mut out = String::new();
    for (idx, amphibian) in amphibians.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", amphibian.title());
        let _ = writeln!(out, "Image: {}", amphibian.image_url);
        let _ = writeln!(out, "{}", amphibian.description);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amphibian(name: &str) -> Amphibian {
        Amphibian {
            name: name.to_string(),
            kind: "Frog".to_string(),
            description: format!("About {name}."),
            image_url: format!("http://x/{name}.png"),
        }
    }

    #[test]
    fn empty_list_prints_nothing() {
        assert_eq!(render_cards(&[]), "");
    }

    #[test]
    fn cards_are_separated_by_blank_line() {
        let text = render_cards(&[amphibian("a"), amphibian("b")]);
        assert_eq!(
            text,
            "a (Frog)\nImage: http://x/a.png\nAbout a.\n\nb (Frog)\nImage: http://x/b.png\nAbout b.\n"
        );
    }
}
