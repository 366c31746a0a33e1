use labelkit_core::SymbolError;
use labelkit_designer::barcode::encode;
use labelkit_designer::{
    render_barcode, BarcodeFormat, BarcodeRequest, BarcodeSymbol, SymbolRenderer,
};

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
fn test_ean13_falls_back_to_code128() {
    let graphic = render_barcode(&request("ABC", BarcodeFormat::Ean13));
    assert_eq!(graphic.format, Some(BarcodeFormat::Code128));
    assert!(!graphic.is_empty());
    assert_eq!(graphic.text.as_deref(), Some("ABC"));
}

#[test]
fn test_valid_formats_keep_their_symbology() {
    for (value, format) in [
        ("HELLO-39", BarcodeFormat::Code39),
        ("4006381333931", BarcodeFormat::Ean13),
        ("036000291452", BarcodeFormat::Upc),
        ("Lote 7/24", BarcodeFormat::Code128),
    ] {
        let graphic = render_barcode(&request(value, format));
        assert_eq!(graphic.format, Some(format), "{value}");
    }
}

#[test]
fn test_ean13_module_count() {
    let modules = encode(BarcodeFormat::Ean13, "400638133393").unwrap();
    assert_eq!(modules.len(), 95);
}

#[test]
fn test_unencodable_everywhere() {
    let err = encode(BarcodeFormat::Code128, "día").unwrap_err();
    assert!(matches!(err, SymbolError::InvalidCharacter { character: 'í', .. }));
    assert!(render_barcode(&request("día", BarcodeFormat::Code39)).is_empty());
}

#[test]
fn test_symbol_regenerates_on_change_only() {
    let renderer = SymbolRenderer::default();
    let mut symbol = BarcodeSymbol::new();
    let mut req = request("12345678", BarcodeFormat::Code128);

    symbol.update(&renderer, &req);
    symbol.update(&renderer, &req);
    assert_eq!(symbol.generations(), 1);

    req.width_px = 300.0;
    symbol.update(&renderer, &req);
    req.show_text = false;
    let graphic = symbol.update(&renderer, &req);
    assert!(graphic.text.is_none());
    assert_eq!(symbol.generations(), 3);
}
