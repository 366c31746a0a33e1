//! Text metrics for label text.
//!
//! Label text is drawn in a monospace face. When a system monospace font can
//! be loaded through `fontdb`, widths come from its real glyph advances;
//! otherwise a fixed-pitch approximation is used.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{point as rt_point, Font, Scale};
use std::{
    collections::HashMap,
    fs,
    sync::{Mutex, OnceLock},
};

/// Measures single-line text at a pixel font size.
pub trait TextMetrics {
    /// Advance width of `text` in pixels.
    fn text_width(&self, text: &str, font_px: f64, bold: bool) -> f64;
    /// Distance from the top of the line box to the baseline.
    fn ascent(&self, font_px: f64) -> f64;
    /// Height of the line box.
    fn line_height(&self, font_px: f64) -> f64;

    fn text_size(&self, text: &str, font_px: f64, bold: bool) -> (f64, f64) {
        (self.text_width(text, font_px, bold), self.line_height(font_px))
    }
}

/// Fixed-pitch approximation of a monospace face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of one character, in em.
    pub advance_em: f64,
    pub ascent_em: f64,
    pub line_height_em: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance_em: 0.6,
            ascent_em: 0.8,
            line_height_em: 1.2,
        }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, font_px: f64, _bold: bool) -> f64 {
        text.chars().count() as f64 * self.advance_em * font_px
    }

    fn ascent(&self, font_px: f64) -> f64 {
        self.ascent_em * font_px
    }

    fn line_height(&self, font_px: f64) -> f64 {
        self.line_height_em * font_px
    }
}

/// Metrics backed by loaded font files.
#[derive(Clone, Copy)]
pub struct FontMetrics {
    regular: &'static Font<'static>,
    bold: &'static Font<'static>,
}

impl std::fmt::Debug for FontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMetrics").finish_non_exhaustive()
    }
}

impl FontMetrics {
    /// Loads the system monospace family, if the platform has one.
    pub fn system_monospace() -> Option<Self> {
        let regular = get_font_for("Monospace", false)?;
        let bold = get_font_for("Monospace", true).unwrap_or(regular);
        Some(Self { regular, bold })
    }

    fn font(&self, bold: bool) -> &Font<'static> {
        if bold {
            self.bold
        } else {
            self.regular
        }
    }
}

impl TextMetrics for FontMetrics {
    fn text_width(&self, text: &str, font_px: f64, bold: bool) -> f64 {
        let scale = Scale::uniform(font_px as f32);
        self.font(bold)
            .layout(text, scale, rt_point(0.0, 0.0))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0) as f64
    }

    fn ascent(&self, font_px: f64) -> f64 {
        self.regular.v_metrics(Scale::uniform(font_px as f32)).ascent as f64
    }

    fn line_height(&self, font_px: f64) -> f64 {
        let v = self.regular.v_metrics(Scale::uniform(font_px as f32));
        (v.ascent - v.descent + v.line_gap) as f64
    }
}

/// Process-wide metrics: the system monospace font when available,
/// otherwise [`MonospaceMetrics`].
pub fn default_metrics() -> &'static dyn TextMetrics {
    static METRICS: OnceLock<Box<dyn TextMetrics + Send + Sync>> = OnceLock::new();
    METRICS
        .get_or_init(|| match FontMetrics::system_monospace() {
            Some(metrics) => Box::new(metrics),
            None => {
                tracing::debug!("No system monospace font; using fixed-pitch text metrics");
                Box::new(MonospaceMetrics::default())
            }
        })
        .as_ref()
}

#[derive(Clone, Eq, PartialEq, Hash)]
struct FontKey {
    family: String,
    bold: bool,
}

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

/// Looks up a system font by family, caching loaded faces for the lifetime
/// of the process.
pub fn get_font_for(family: &str, bold: bool) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<FontKey, &'static Font<'static>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    let key = FontKey {
        family: family.to_string(),
        bold,
    };

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(&key) {
        return Some(font);
    }

    let font: &'static Font<'static> = Box::leak(Box::new(load_font_from_system(family, bold)?));
    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(key, font);
    Some(font)
}

fn load_font_from_system(family: &str, bold: bool) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Monospace" => vec![Family::Monospace],
        "Sans" => vec![Family::SansSerif],
        "Serif" => vec![Family::Serif],
        other => vec![Family::Name(other), Family::Monospace],
    };

    let query = Query {
        families: &families,
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), face.index)
        }
    }
}
