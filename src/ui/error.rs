//! Error rendering for the command boundary

use assetmap::domain::ports::StoreError;
use assetmap::AssetMapError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let mut out = format!(
        "{} {}\n",
        icon,
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );
    if let Some(hint) = err.downcast_ref::<AssetMapError>().and_then(hint) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!("hint: {}", hint)).render(supports_color)
        ));
    }
    out
}

/// JSON error object for `--json` mode
pub fn error_json(err: &anyhow::Error) -> serde_json::Value {
    let kind = err
        .downcast_ref::<AssetMapError>()
        .map(kind)
        .unwrap_or("error");
    serde_json::json!({
        "type": "error",
        "kind": kind,
        "message": err.to_string(),
    })
}

fn kind(err: &AssetMapError) -> &'static str {
    match err {
        AssetMapError::Validation { .. } => "validation",
        AssetMapError::DuplicateId { .. } => "duplicate_id",
        AssetMapError::DuplicateMapping { .. } => "duplicate_mapping",
        AssetMapError::NotFound { .. } => "not_found",
        AssetMapError::Referential { .. } => "referential",
        AssetMapError::Dependency { .. } => "dependency",
        AssetMapError::Export { .. } => "export",
        AssetMapError::Clean { .. } => "clean",
        AssetMapError::Config { .. } => "config",
        AssetMapError::Persistence(_) => "persistence",
    }
}

fn hint(err: &AssetMapError) -> Option<&'static str> {
    match err {
        AssetMapError::Referential { .. } => Some("add the asset first, then map it"),
        AssetMapError::Persistence(StoreError::Corrupted { .. }) => {
            Some("the file was left untouched; nothing was loaded from it")
        }
        _ => None,
    }
}
