use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use usvg::fontdb;

use crate::foundation::error::{CardError, CardResult};
use crate::surface::{FontFamily, FontSpec, GenericFamily};

/// Extra font directory scanned in addition to the system fonts.
pub const FONT_DIR_ENV: &str = "CARDSMITH_FONT_DIR";

static SYSTEM_FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();

fn system_fonts() -> Arc<fontdb::Database> {
    SYSTEM_FONTS
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            if let Some(dir) = std::env::var_os(FONT_DIR_ENV) {
                db.load_fonts_dir(dir);
            }
            tracing::debug!(faces = db.len(), "loaded font database");
            Arc::new(db)
        })
        .clone()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct FaceKey {
    family: FontFamily,
    bold: bool,
    italic: bool,
}

impl From<&FontSpec> for FaceKey {
    fn from(spec: &FontSpec) -> Self {
        Self {
            family: spec.family,
            bold: spec.bold,
            italic: spec.italic,
        }
    }
}

/// One resolved face with its own Parley context, so shaping and painting always agree on the
/// face in use.
struct LoadedFace {
    font_ctx: parley::FontContext,
    family_name: String,
    data: vello_cpu::peniko::FontData,
}

/// A single shaped line, positioned relative to its left edge on the alphabetic baseline.
pub(crate) struct ShapedLine {
    pub(crate) width: f64,
    pub(crate) ascent: f64,
    pub(crate) descent: f64,
    pub(crate) size: f32,
    pub(crate) glyphs: Vec<vello_cpu::Glyph>,
    /// `None` when metrics were estimated because no face is installed.
    pub(crate) font: Option<vello_cpu::peniko::FontData>,
}

/// Font resolution and shaping.
///
/// Resolution walks preferred family, then generic family, then sans-serif, then any installed
/// face. Without any face, widths come from a fixed per-character advance model and text is not
/// painted.
pub struct FontBook {
    db: Option<Arc<fontdb::Database>>,
    faces: HashMap<FaceKey, Option<LoadedFace>>,
    layout_ctx: parley::LayoutContext<()>,
    warned_unpainted: bool,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces_in_db", &self.db.as_ref().map(|db| db.len()))
            .field("resolved", &self.faces.len())
            .finish()
    }
}

impl FontBook {
    /// Font book over the process-wide system font database (loaded once).
    pub fn system() -> Self {
        Self::with_database(system_fonts())
    }

    /// Font book over a caller-provided database.
    pub fn with_database(db: Arc<fontdb::Database>) -> Self {
        Self {
            db: Some(db),
            faces: HashMap::new(),
            layout_ctx: parley::LayoutContext::new(),
            warned_unpainted: false,
        }
    }

    /// Font book that never loads a face and always uses estimated metrics.
    pub fn estimated() -> Self {
        Self {
            db: None,
            faces: HashMap::new(),
            layout_ctx: parley::LayoutContext::new(),
            warned_unpainted: false,
        }
    }

    /// Advance width of `text` in pixels.
    pub fn measure(&mut self, text: &str, spec: &FontSpec) -> CardResult<f64> {
        Ok(self.shape(text, spec)?.width)
    }

    pub(crate) fn shape(&mut self, text: &str, spec: &FontSpec) -> CardResult<ShapedLine> {
        if !spec.size.is_finite() || spec.size <= 0.0 {
            return Err(CardError::layout(format!(
                "font size must be finite and > 0, got {}",
                spec.size
            )));
        }
        let text = single_line(text);
        let text: &str = &text;

        let key = FaceKey::from(spec);
        if !self.faces.contains_key(&key) {
            let face = self.load_face(key);
            self.faces.insert(key, face);
        }
        let Some(Some(face)) = self.faces.get_mut(&key) else {
            return Ok(estimate_line(text, spec));
        };

        let size = spec.size as f32;
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut face.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(face.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size));
        if spec.bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }
        if spec.italic {
            builder.push_default(parley::style::StyleProperty::FontStyle(
                parley::style::FontStyle::Italic,
            ));
        }
        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut out = ShapedLine {
            width: f64::from(layout.width()),
            ascent: 0.0,
            descent: 0.0,
            size,
            glyphs: Vec::new(),
            font: Some(face.data.clone()),
        };
        if let Some(line) = layout.lines().next() {
            let m = line.metrics();
            out.ascent = f64::from(m.ascent);
            out.descent = f64::from(m.descent);
            let baseline = m.baseline;
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                out.glyphs
                    .extend(run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y - baseline,
                    }));
            }
        }
        Ok(out)
    }

    /// Log once that glyphs are being skipped.
    pub(crate) fn note_unpainted(&mut self) {
        if !self.warned_unpainted {
            self.warned_unpainted = true;
            tracing::warn!("no font face installed; text is measured but not painted");
        }
    }

    fn load_face(&self, key: FaceKey) -> Option<LoadedFace> {
        let db = self.db.as_ref()?;

        let mut families = Vec::<fontdb::Family<'_>>::new();
        if let Some(name) = key.family.preferred_name() {
            families.push(fontdb::Family::Name(name));
        }
        families.push(match key.family.generic() {
            GenericFamily::SansSerif => fontdb::Family::SansSerif,
            GenericFamily::Serif => fontdb::Family::Serif,
            GenericFamily::Cursive => fontdb::Family::Cursive,
            GenericFamily::Display => fontdb::Family::Fantasy,
        });
        families.push(fontdb::Family::SansSerif);

        let query = fontdb::Query {
            families: &families,
            weight: if key.bold {
                fontdb::Weight::BOLD
            } else {
                fontdb::Weight::NORMAL
            },
            style: if key.italic {
                fontdb::Style::Italic
            } else {
                fontdb::Style::Normal
            },
            ..Default::default()
        };

        let id = db
            .query(&query)
            .or_else(|| db.faces().next().map(|f| f.id))?;
        let face_family = db
            .face(id)
            .and_then(|f| f.families.first().map(|(name, _)| name.clone()))?;
        let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;

        let mut font_ctx = parley::FontContext::default();
        let registered = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        if registered.is_empty() {
            tracing::warn!(family = %face_family, "font face could not be registered");
            return None;
        }

        tracing::debug!(
            requested = ?key.family,
            resolved = %face_family,
            bold = key.bold,
            italic = key.italic,
            "resolved font face"
        );
        Some(LoadedFace {
            font_ctx,
            family_name: face_family,
            data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), index),
        })
    }
}

fn single_line(text: &str) -> Cow<'_, str> {
    if text.contains(['\n', '\r', '\t']) {
        Cow::Owned(text.replace(['\n', '\r', '\t'], " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Per-character advance, in ems.
fn estimated_advance(c: char) -> f64 {
    match c {
        ' ' => 0.28,
        'i' | 'j' | 'l' | '.' | ',' | '\'' | '!' | '|' | ':' | ';' => 0.3,
        'f' | 't' | 'r' | 'I' => 0.4,
        'm' | 'w' | 'M' | 'W' | '@' => 0.85,
        c if c.is_uppercase() => 0.68,
        c if c.is_ascii() => 0.55,
        // Emoji and wide scripts.
        _ => 1.0,
    }
}

pub(crate) fn estimate_line(text: &str, spec: &FontSpec) -> ShapedLine {
    let weight = if spec.bold { 1.06 } else { 1.0 };
    let em: f64 = text.chars().map(estimated_advance).sum();
    ShapedLine {
        width: em * weight * spec.size,
        ascent: 0.8 * spec.size,
        descent: 0.2 * spec.size,
        size: spec.size as f32,
        glyphs: Vec::new(),
        font: None,
    }
}
