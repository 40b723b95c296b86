//! Clean command UI view

use assetmap::application::CleanResult;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_clean_result(
    result: &CleanResult,
    check: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let source = result.source.display();
    if !result.changed() {
        return format!(
            "{} {} has no invisible characters\n",
            Icon::Success.colored(supports_color, supports_unicode),
            source
        );
    }

    let headline = match (&result.written, check) {
        (_, true) => format!("{} would change", source),
        (Some(target), _) if *target == result.source => format!("Cleaned {}", source),
        (Some(target), _) => format!("Cleaned {} into {}", source, target.display()),
        (None, _) => format!("{} not written", source),
    };
    let icon = if check { Icon::Warning } else { Icon::Success };

    let mut out = format!(
        "{} {}\n",
        icon.colored(supports_color, supports_unicode),
        ColoredText::plain(headline).bold().render(supports_color)
    );
    for (c, name, count) in result.report.entries() {
        out.push_str(&format!("  U+{:04X} {:<28} {}\n", c as u32, name, count));
    }
    out.push_str(&format!(
        "  {}\n",
        ColoredText::dim(format!("{} replaced", result.report.total())).render(supports_color)
    ));
    out
}
