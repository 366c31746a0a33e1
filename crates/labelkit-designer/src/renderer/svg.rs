//! SVG output for rendered scenes and photo overlays.

use lyon::math::{vector, Angle, Transform};

use labelkit_core::Size;

use super::{LabelScene, NodeContent, SceneNode};
use crate::editor::SnapGuides;
use crate::overlays::{BatchSimulationItem, BoxLabelSimulation, PositioningGuide};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const SELECTION_COLOR: &str = "#3b82f6";
const HANDLE_COLOR: &str = "#2563eb";
const GUIDE_COLOR: &str = "#f87171";
/// Side of the square resize handle, in pixels.
const HANDLE_PX: f64 = 12.0;

/// Editor-only marks drawn over a scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorDecorations {
    pub selected_id: Option<String>,
    /// Draw the resize handle on a selected barcode or frame.
    pub show_handle: bool,
    pub guides: SnapGuides,
}

/// Formats a coordinate with at most three decimals.
pub(crate) fn fmt_num(value: f64) -> String {
    let value = if value.abs() < 5e-4 { 0.0 } else { value };
    let text = format!("{value:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// SVG `matrix(...)` for a 2D transform.
pub fn matrix(t: &Transform) -> String {
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_num(t.m11 as f64),
        fmt_num(t.m12 as f64),
        fmt_num(t.m21 as f64),
        fmt_num(t.m22 as f64),
        fmt_num(t.m31 as f64),
        fmt_num(t.m32 as f64)
    )
}

fn open_document(out: &mut String, size: Size) {
    out.push_str(&format!(
        r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        SVG_NS,
        fmt_num(size.width),
        fmt_num(size.height),
        fmt_num(size.width),
        fmt_num(size.height)
    ));
}

fn write_node(out: &mut String, node: &SceneNode, decorations: Option<&EditorDecorations>) {
    out.push_str(&format!(
        r#"<g data-id="{}" transform="{}">"#,
        escape_xml(&node.id),
        matrix(&node.transform())
    ));
    match &node.content {
        NodeContent::Text {
            value,
            font_px,
            bold,
            ascent,
        } => {
            out.push_str(&format!(
                r#"<text x="0" y="{}" font-family="monospace" font-size="{}" font-weight="{}" xml:space="preserve">{}</text>"#,
                fmt_num(*ascent),
                fmt_num(*font_px),
                if *bold { "bold" } else { "normal" },
                escape_xml(value)
            ));
        }
        NodeContent::Barcode(graphic) => graphic.write_svg(out, 0.0, 0.0),
        NodeContent::Frame { border_px } => {
            out.push_str(&format!(
                r##"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#000000" stroke-width="{}"/>"##,
                fmt_num(border_px / 2.0),
                fmt_num(border_px / 2.0),
                fmt_num((node.size.width - border_px).max(0.0)),
                fmt_num((node.size.height - border_px).max(0.0)),
                fmt_num(*border_px)
            ));
        }
    }

    if let Some(decor) = decorations {
        if decor.selected_id.as_deref() == Some(node.id.as_str()) {
            out.push_str(&format!(
                r#"<rect x="-2" y="-2" width="{}" height="{}" fill="none" stroke="{}" stroke-width="1" stroke-dasharray="4 2"/>"#,
                fmt_num(node.size.width + 4.0),
                fmt_num(node.size.height + 4.0),
                SELECTION_COLOR
            ));
            if decor.show_handle && node.is_resizable() {
                out.push_str(&format!(
                    r##"<rect class="resize-handle" x="{}" y="{}" width="{}" height="{}" fill="#ffffff" stroke="{}" stroke-width="2"/>"##,
                    fmt_num(node.size.width - HANDLE_PX / 2.0),
                    fmt_num(node.size.height - HANDLE_PX / 2.0),
                    fmt_num(HANDLE_PX),
                    fmt_num(HANDLE_PX),
                    HANDLE_COLOR
                ));
            }
        }
    }
    out.push_str("</g>");
}

/// Writes the label background and nodes, without the document wrapper.
fn write_scene_body(
    out: &mut String,
    scene: &LabelScene,
    decorations: Option<&EditorDecorations>,
) {
    out.push_str(&format!(
        r##"<rect x="0" y="0" width="{}" height="{}" fill="#ffffff"/>"##,
        fmt_num(scene.width_px),
        fmt_num(scene.height_px)
    ));
    for node in &scene.nodes {
        write_node(out, node, decorations);
    }

    let Some(decor) = decorations else {
        return;
    };
    if let Some(x) = decor.guides.x {
        out.push_str(&format!(
            r#"<line class="guide" x1="{x}" y1="0" x2="{x}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            fmt_num(scene.height_px),
            GUIDE_COLOR,
            x = fmt_num(x)
        ));
    }
    if let Some(y) = decor.guides.y {
        out.push_str(&format!(
            r#"<line class="guide" x1="0" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="1"/>"#,
            fmt_num(scene.width_px),
            GUIDE_COLOR,
            y = fmt_num(y)
        ));
    }
}

/// Serialises a scene as a standalone SVG document, optionally with the
/// editor's selection, resize handle and snap guides.
pub fn scene_to_svg(scene: &LabelScene, decorations: Option<&EditorDecorations>) -> String {
    let mut out = String::new();
    open_document(&mut out, scene.size());
    write_scene_body(&mut out, scene, decorations);
    out.push_str("</svg>");
    out
}

fn write_photo(out: &mut String, uri: Option<&str>, container: Size) {
    match uri {
        Some(uri) => out.push_str(&format!(
            r#"<image href="{}" x="0" y="0" width="{}" height="{}" preserveAspectRatio="none"/>"#,
            escape_xml(uri),
            fmt_num(container.width),
            fmt_num(container.height)
        )),
        None => out.push_str(&format!(
            r##"<rect x="0" y="0" width="{}" height="{}" fill="#f3f4f6"/>"##,
            fmt_num(container.width),
            fmt_num(container.height)
        )),
    }
}

/// The label scene composited onto the box photograph.
pub fn box_composite_svg(sim: &BoxLabelSimulation, scene: &LabelScene, container: Size) -> String {
    let mut out = String::new();
    open_document(&mut out, container);
    write_photo(&mut out, sim.box_image_url.as_deref(), container);
    let transform = sim.composite_transform(container, scene.size());
    out.push_str(&format!(r#"<g transform="{}">"#, matrix(&transform)));
    write_scene_body(&mut out, scene, None);
    out.push_str("</g></svg>");
    out
}

/// A batch mark drawn over its product photo.
pub fn batch_mark_svg(item: &BatchSimulationItem, container: Size) -> String {
    let mut out = String::new();
    open_document(&mut out, container);
    write_photo(&mut out, item.base_image_url.as_deref(), container);

    let anchor = item.anchor(container);
    let transform = Transform::rotation(Angle::degrees(item.rotation as f32))
        .then_translate(vector(anchor.x as f32, anchor.y as f32));
    let font_px = item.font_px(container.width);
    out.push_str(&format!(
        r#"<g transform="{}" fill="{}" font-family="monospace" text-anchor="middle">"#,
        matrix(&transform),
        escape_xml(item.display_color())
    ));
    out.push_str(&format!(
        r#"<text x="0" y="0" dominant-baseline="middle" font-size="{}" font-weight="bold">{}</text>"#,
        fmt_num(font_px),
        escape_xml(&item.batch_code)
    ));
    if !item.legal_text.is_empty() {
        out.push_str(&format!(
            r#"<text x="0" y="{}" dominant-baseline="middle" font-size="{}">{}</text>"#,
            fmt_num(font_px),
            fmt_num(font_px * 0.6),
            escape_xml(&item.legal_text)
        ));
    }
    out.push_str("</g></svg>");
    out
}

/// The positioning line and its caption over the photo.
pub fn guide_svg(guide: &PositioningGuide, container: Size) -> String {
    let mut out = String::new();
    open_document(&mut out, container);
    write_photo(&mut out, guide.image_url.as_deref(), container);
    if guide.show_guide {
        let y = guide.guide_y / 100.0 * container.height;
        out.push_str(&format!(
            r##"<line x1="0" y1="{y}" x2="{}" y2="{y}" stroke="#ef4444" stroke-width="2" stroke-dasharray="6 4"/>"##,
            fmt_num(container.width),
            y = fmt_num(y)
        ));
        out.push_str(&format!(
            r##"<text x="8" y="{}" font-family="sans-serif" font-size="12" fill="#ef4444">{}</text>"##,
            fmt_num((y - 6.0).max(12.0)),
            escape_xml(&guide.caption())
        ));
        out.push_str(&format!(
            r##"<text x="{}" y="{}" text-anchor="end" font-family="sans-serif" font-size="12" fill="#ef4444">{}</text>"##,
            fmt_num(container.width - 8.0),
            fmt_num((y - 6.0).max(12.0)),
            guide.percent_label()
        ));
    }
    out.push_str("</svg>");
    out
}
