//! Barcode symbol rendering.
//!
//! Symbols are encoded at a fixed internal resolution (one unit per module,
//! a tall bar height) and emitted as an SVG whose `viewBox` is stretched
//! without preserving aspect ratio onto the requested pixel box. Bar widths
//! are therefore not physically exact, but the footprint on the label is.
//!
//! Encoding failures never escape [`SymbolRenderer::render`]: an unencodable
//! value is retried as CODE128 and, failing that, yields an empty graphic.

use barcoders::sym::{code128::Code128, code39::Code39, ean13::EAN13};
use labelkit_core::SymbolError;
use labelkit_settings::BarcodeSettings;

use crate::model::BarcodeFormat;
use crate::renderer::svg::{escape_xml, fmt_num};

/// Code 128 character set B prefix understood by the encoder.
const CODE128_SET_B: char = 'Ɓ';
/// Code 128 character set C prefix (digit pairs).
const CODE128_SET_C: char = 'Ć';

/// Everything that affects the drawn symbol. A change in any field forces
/// regeneration.
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeRequest {
    pub value: String,
    pub format: BarcodeFormat,
    pub show_text: bool,
    pub font_size: f64,
    pub width_px: f64,
    pub height_px: f64,
}

/// A rendered symbol, ready to be placed into a pixel box.
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeGraphic {
    /// Symbology actually used, `None` when nothing could be encoded.
    pub format: Option<BarcodeFormat>,
    /// One entry per module, `1` for a bar.
    pub modules: Vec<u8>,
    /// Human readable line drawn under the bars.
    pub text: Option<String>,
    pub font_size: f64,
    pub module_width: f64,
    pub bar_height: f64,
    pub width_px: f64,
    pub height_px: f64,
}

impl BarcodeGraphic {
    /// A graphic that draws nothing.
    pub fn empty(width_px: f64, height_px: f64) -> Self {
        Self {
            format: None,
            modules: Vec::new(),
            text: None,
            font_size: 0.0,
            module_width: 1.0,
            bar_height: 0.0,
            width_px,
            height_px,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Internal coordinate system width.
    pub fn view_width(&self) -> f64 {
        self.modules.len() as f64 * self.module_width
    }

    /// Internal coordinate system height: the bars plus the text line.
    pub fn view_height(&self) -> f64 {
        match self.text {
            Some(_) => self.bar_height + self.font_size.max(0.0),
            None => self.bar_height,
        }
    }

    /// Bars as `(x, width)` runs in internal units.
    pub fn bars(&self) -> Vec<(f64, f64)> {
        let mut runs = Vec::new();
        let mut start: Option<usize> = None;
        for (i, module) in self.modules.iter().enumerate() {
            match (*module == 1, start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    runs.push((s, i - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, self.modules.len() - s));
        }
        runs.into_iter()
            .map(|(s, len)| (s as f64 * self.module_width, len as f64 * self.module_width))
            .collect()
    }

    /// Writes a nested `<svg>` element filling the box at `(x, y)`.
    pub fn write_svg(&self, out: &mut String, x: f64, y: f64) {
        if self.is_empty() {
            out.push_str(&format!(
                r#"<svg x="{}" y="{}" width="{}" height="{}"/>"#,
                fmt_num(x),
                fmt_num(y),
                fmt_num(self.width_px),
                fmt_num(self.height_px)
            ));
            return;
        }

        let view_width = self.view_width();
        out.push_str(&format!(
            r#"<svg x="{}" y="{}" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="none">"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(self.width_px),
            fmt_num(self.height_px),
            fmt_num(view_width),
            fmt_num(self.view_height())
        ));
        out.push_str(r##"<g fill="#000000">"##);
        for (bar_x, bar_w) in self.bars() {
            out.push_str(&format!(
                r#"<rect x="{}" y="0" width="{}" height="{}"/>"#,
                fmt_num(bar_x),
                fmt_num(bar_w),
                fmt_num(self.bar_height)
            ));
        }
        out.push_str("</g>");
        if let Some(text) = &self.text {
            out.push_str(&format!(
                r#"<text x="{}" y="{}" text-anchor="middle" font-family="monospace" font-weight="bold" font-size="{}">{}</text>"#,
                fmt_num(view_width / 2.0),
                fmt_num(self.bar_height + self.font_size),
                fmt_num(self.font_size),
                escape_xml(text)
            ));
        }
        out.push_str("</svg>");
    }

    /// Standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out, 0.0, 0.0);
        out.replacen("<svg ", r#"<svg xmlns="http://www.w3.org/2000/svg" "#, 1)
    }
}

/// Encodes `value` as modules. Checksums are computed by the encoder, never
/// validated.
pub fn encode(format: BarcodeFormat, value: &str) -> Result<Vec<u8>, SymbolError> {
    match format {
        BarcodeFormat::Code128 => {
            let payload = code128_payload(value)?;
            Code128::new(payload)
                .map(|symbol| symbol.encode())
                .map_err(|e| encoder_error(format, e))
        }
        BarcodeFormat::Code39 => {
            check_charset(format, value, |c| {
                c.is_ascii_digit() || c.is_ascii_uppercase() || "-. $/+%".contains(c)
            })?;
            Code39::new(value.to_string())
                .map(|symbol| symbol.encode())
                .map_err(|e| encoder_error(format, e))
        }
        BarcodeFormat::Ean13 => {
            let digits = digits_of(format, value, &[12, 13])?;
            ean13_modules(format, &digits[..12])
        }
        BarcodeFormat::Upc => {
            // UPC-A is EAN-13 with a leading zero.
            let digits = digits_of(format, value, &[11, 12])?;
            ean13_modules(format, &format!("0{}", &digits[..11]))
        }
    }
}

fn ean13_modules(format: BarcodeFormat, digits: &str) -> Result<Vec<u8>, SymbolError> {
    EAN13::new(digits.to_string())
        .map(|symbol| symbol.encode())
        .map_err(|e| encoder_error(format, e))
}

fn code128_payload(value: &str) -> Result<String, SymbolError> {
    check_charset(BarcodeFormat::Code128, value, |c| (' '..='~').contains(&c))?;
    let all_digits = value.bytes().all(|b| b.is_ascii_digit());
    let prefix = if all_digits && value.len() >= 2 && value.len() % 2 == 0 {
        CODE128_SET_C
    } else {
        CODE128_SET_B
    };
    Ok(format!("{prefix}{value}"))
}

fn check_charset(
    format: BarcodeFormat,
    value: &str,
    allowed: impl Fn(char) -> bool,
) -> Result<(), SymbolError> {
    match value.chars().find(|c| !allowed(*c)) {
        Some(character) => Err(SymbolError::InvalidCharacter {
            symbology: format.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

fn digits_of<'a>(
    format: BarcodeFormat,
    value: &'a str,
    lengths: &[usize],
) -> Result<&'a str, SymbolError> {
    check_charset(format, value, |c| c.is_ascii_digit())?;
    if !lengths.contains(&value.len()) {
        return Err(SymbolError::InvalidLength {
            symbology: format.to_string(),
            expected: lengths
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" or "),
            actual: value.len(),
        });
    }
    Ok(value)
}

fn encoder_error(format: BarcodeFormat, error: impl std::fmt::Debug) -> SymbolError {
    SymbolError::Encoder {
        symbology: format.to_string(),
        reason: format!("{error:?}"),
    }
}

/// Turns requests into graphics using the configured symbol geometry.
#[derive(Debug, Clone)]
pub struct SymbolRenderer {
    module_width: f64,
    bar_height: f64,
    placeholder: String,
}

impl Default for SymbolRenderer {
    fn default() -> Self {
        Self::new(&BarcodeSettings::default())
    }
}

impl SymbolRenderer {
    pub fn new(settings: &BarcodeSettings) -> Self {
        Self {
            module_width: settings.module_width,
            bar_height: settings.bar_height,
            placeholder: settings.placeholder_value.clone(),
        }
    }

    /// Renders the request, falling back to CODE128 when the requested
    /// symbology rejects the value.
    pub fn render(&self, request: &BarcodeRequest) -> BarcodeGraphic {
        let value = if request.value.is_empty() {
            self.placeholder.as_str()
        } else {
            request.value.as_str()
        };

        let encoded = match encode(request.format, value) {
            Ok(modules) => Ok((request.format, modules)),
            Err(err) if request.format != BarcodeFormat::Code128 => {
                tracing::warn!(
                    "Barcode value {:?} rejected by {}: {}; falling back to CODE128",
                    value,
                    request.format,
                    err
                );
                encode(BarcodeFormat::Code128, value).map(|m| (BarcodeFormat::Code128, m))
            }
            Err(err) => Err(err),
        };

        match encoded {
            Ok((format, modules)) => BarcodeGraphic {
                format: Some(format),
                modules,
                text: request.show_text.then(|| value.to_string()),
                font_size: request.font_size,
                module_width: self.module_width,
                bar_height: self.bar_height,
                width_px: request.width_px,
                height_px: request.height_px,
            },
            Err(err) => {
                tracing::error!("Barcode rendering failed for {:?}: {}", value, err);
                BarcodeGraphic::empty(request.width_px, request.height_px)
            }
        }
    }
}

/// Renders with the default symbol geometry.
pub fn render_barcode(request: &BarcodeRequest) -> BarcodeGraphic {
    SymbolRenderer::default().render(request)
}

/// A barcode that regenerates only when its inputs change.
#[derive(Debug, Clone, Default)]
pub struct BarcodeSymbol {
    current: Option<(BarcodeRequest, BarcodeGraphic)>,
    generations: usize,
}

impl BarcodeSymbol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the graphic for `request`, regenerating when any input
    /// differs from the previous call.
    pub fn update(
        &mut self,
        renderer: &SymbolRenderer,
        request: &BarcodeRequest,
    ) -> &BarcodeGraphic {
        if matches!(&self.current, Some((previous, _)) if previous != request) {
            self.current = None;
        }
        let generations = &mut self.generations;
        let (_, graphic) = self.current.get_or_insert_with(|| {
            *generations += 1;
            (request.clone(), renderer.render(request))
        });
        graphic
    }

    /// Number of times the symbol was regenerated.
    pub fn generations(&self) -> usize {
        self.generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(value: &str, format: BarcodeFormat) -> BarcodeRequest {
        BarcodeRequest {
            value: value.to_string(),
            format,
            show_text: true,
            font_size: 12.0,
            width_px: 320.0,
            height_px: 160.0,
        }
    }

    #[test]
    fn test_code39_rejects_lowercase() {
        let err = encode(BarcodeFormat::Code39, "abc").unwrap_err();
        assert!(matches!(err, SymbolError::InvalidCharacter { character: 'a', .. }));
    }

    #[test]
    fn test_ean13_length_checked() {
        let err = encode(BarcodeFormat::Ean13, "12345").unwrap_err();
        assert!(matches!(err, SymbolError::InvalidLength { actual: 5, .. }));
        assert!(encode(BarcodeFormat::Ean13, "750103131130").is_ok());
    }

    #[test]
    fn test_upc_matches_zero_prefixed_ean13() {
        let upc = encode(BarcodeFormat::Upc, "03600029145").unwrap();
        let ean = encode(BarcodeFormat::Ean13, "003600029145").unwrap();
        assert_eq!(upc, ean);
    }

    #[test]
    fn test_empty_value_uses_placeholder() {
        let graphic = render_barcode(&request("", BarcodeFormat::Code128));
        assert!(!graphic.is_empty());
        assert_eq!(graphic.text.as_deref(), Some("12345"));
    }

    #[test]
    fn test_view_box_includes_text_line() {
        let mut req = request("ABC-1", BarcodeFormat::Code128);
        let graphic = render_barcode(&req);
        assert_eq!(graphic.view_height(), 112.0);

        req.show_text = false;
        let graphic = render_barcode(&req);
        assert_eq!(graphic.view_height(), 100.0);
        assert!(graphic.text.is_none());
    }

    #[test]
    fn test_svg_stretches_to_box() {
        let svg = render_barcode(&request("12345678", BarcodeFormat::Code128)).to_svg();
        assert!(svg.contains(r#"preserveAspectRatio="none""#));
        assert!(svg.contains(r#"width="320""#));
        assert!(svg.contains(r#"height="160""#));
        assert!(svg.contains(">12345678</text>"));
    }

    #[test]
    fn test_non_ascii_value_renders_empty() {
        let graphic = render_barcode(&request("ÑANDÚ", BarcodeFormat::Ean13));
        assert!(graphic.is_empty());
        assert_eq!(graphic.format, None);
        assert_eq!((graphic.width_px, graphic.height_px), (320.0, 160.0));
    }

    #[test]
    fn test_bars_merge_runs() {
        let graphic = BarcodeGraphic {
            modules: vec![1, 1, 0, 1, 0, 0, 1, 1, 1],
            ..BarcodeGraphic::empty(10.0, 10.0)
        };
        assert_eq!(graphic.bars(), vec![(0.0, 2.0), (3.0, 1.0), (6.0, 3.0)]);
    }
}
