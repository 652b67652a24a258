//! Style catalog: the immutable template table.
//!
//! Lookups are total. An unknown id resolves to [`DEFAULT_TEMPLATE`] with a debug log, never an
//! error.

/// Typed descriptors.
pub mod model;
mod table;

pub use model::{
    Background, BackgroundKind, Decoration, Landmark, ModernScene, NatureScene, PatternScene,
    PostcardScene, SeasonalScene, ShapeKind, SpaceScene, StyleDescriptor,
};

use table::CATALOG;

/// Template used when an id is not in the catalog.
pub const DEFAULT_TEMPLATE: &str = "modern";

/// Descriptor for `template_id`, or the default descriptor when the id is unknown.
pub fn resolve_style(template_id: &str) -> &'static StyleDescriptor {
    if let Some(d) = CATALOG.get(template_id) {
        return d;
    }
    tracing::debug!(template_id, fallback = DEFAULT_TEMPLATE, "unknown template id");
    default_style()
}

/// Whether `template_id` names a catalog entry.
pub fn is_known(template_id: &str) -> bool {
    CATALOG.get(template_id).is_some()
}

/// All template ids in catalog order.
pub fn template_ids() -> impl Iterator<Item = &'static str> {
    CATALOG.entries.iter().map(|d| d.id)
}

/// All descriptors in catalog order.
pub fn styles() -> &'static [StyleDescriptor] {
    &CATALOG.entries
}

fn default_style() -> &'static StyleDescriptor {
    // The table always contains the default entry; index 0 is checked by tests.
    CATALOG
        .get(DEFAULT_TEMPLATE)
        .unwrap_or(&CATALOG.entries[0])
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/mod.rs"]
mod tests;
