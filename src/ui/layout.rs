use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Rect of `height` rows, vertically centered in `area`, full width.
pub fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}

/// Number of rows `text` occupies when greedily word-wrapped to `width`.
///
/// Mirrors `Paragraph` with `Wrap { trim: true }` closely enough to size
/// cards; words longer than `width` are split.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut total: usize = 0;

    for paragraph in text.split('\n') {
        let mut lines = 1;
        let mut current = 0;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            let needed = if current == 0 { len } else { current + 1 + len };
            if needed <= width {
                current = needed;
                continue;
            }
            if current > 0 {
                lines += 1;
            }
            // Overlong words spill over several rows.
            lines += len.saturating_sub(1) / width;
            current = match len % width {
                0 => width,
                rest => rest,
            };
        }
        total += lines;
    }

    total.min(u16::MAX as usize) as u16
}
